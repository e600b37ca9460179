//! Mobile order workflow: tabbed lists, order detail and the action forms.

mod actions;
mod add_form;
mod detail;
mod mobile;

pub use actions::{CompleteOrderModal, DispatchModal, PaymentModal, RejectOrderModal, SalesReturnModal};
pub use add_form::AddAgriSalesOrderForm;
pub use detail::OrderDetail;
pub use mobile::AgriSalesOrderMobile;
