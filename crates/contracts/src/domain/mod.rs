pub mod a001_farmer;
pub mod a002_public_lead;
pub mod a003_sales_customer;
pub mod a004_broadcast_list;
pub mod a005_campaign;
pub mod a006_agri_sales_order;
pub mod a007_message_template;
