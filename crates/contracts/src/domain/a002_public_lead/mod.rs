pub mod aggregate;

pub use aggregate::{PublicLead, PublicLink};
