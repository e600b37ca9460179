//! u501: personalized WhatsApp template campaign to a recipient selection.

pub mod history;
pub mod params;
pub mod request;
pub mod response;

use super::common::UseCaseMetadata;

pub use history::{history_entries, CampaignHistoryEntry};
pub use params::{build_contacts, empty_param_names, resolve_param_value, PlaceholderToken};
pub use request::{ContactParams, CustomParam, SendTemplateMessageRequest, SendTemplateMessagesRequest};
pub use response::SendResult;

pub struct SendCampaign;

impl UseCaseMetadata for SendCampaign {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "send_campaign"
    }

    fn display_name() -> &'static str {
        "Farmer campaign"
    }

    fn description() -> &'static str {
        "Send an approved WhatsApp template to selected farmers, customers and leads"
    }
}
