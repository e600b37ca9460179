pub mod aggregate;

pub use aggregate::SalesCustomer;
