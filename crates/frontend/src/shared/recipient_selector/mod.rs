//! Multi-source recipient picker shared by the campaign and SMS flows.

pub mod api;
pub mod view;

pub use view::RecipientSelector;
