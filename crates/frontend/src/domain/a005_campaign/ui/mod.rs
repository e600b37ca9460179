mod detail;
mod list;

pub use detail::CampaignDetail;
pub use list::CampaignList;
