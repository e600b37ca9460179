pub mod aggregate;

pub use aggregate::{parse_farmer_list, Farmer, FarmerListResponse};
