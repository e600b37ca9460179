//! Request layer: endpoint registry, JSON requests and image upload.

pub mod endpoints;
pub mod error;
pub mod manager;
pub mod upload;

pub use endpoints::{api, Endpoint, Method};
pub use error::ApiError;
pub use manager::NetworkManager;
pub use upload::upload_image;
