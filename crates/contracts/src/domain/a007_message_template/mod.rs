pub mod aggregate;

pub use aggregate::MessageTemplate;
