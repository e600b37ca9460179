pub mod aggregate;

pub use aggregate::{Campaign, CampaignContact, DeliveryCounts, DeliveryStatus};
