pub mod a004_broadcast_list;
pub mod a005_campaign;
pub mod a006_agri_sales_order;
