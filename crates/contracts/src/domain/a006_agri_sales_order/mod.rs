//! Agri sales orders: backend-owned records plus the request bodies and
//! client-side validation of the order action forms.

pub mod aggregate;
pub mod requests;
pub mod validation;

pub use aggregate::{
    ActivityLogEntry, AgriSalesOrder, DispatchStatus, OrderAction, OrderStatus, OrderTab,
    PaymentEntry,
};
pub use requests::{
    AdjustmentType, CompleteOrderRequest, CreateOrderDto, DispatchMode, DispatchRequest,
    PaymentAdjustment, PaymentMode, PaymentRequest, RejectOrderRequest, SalesReturnRequest,
};
pub use validation::FormError;
