//! u502: plain SMS to one number or to a recipient selection.

pub mod request;
pub mod summary;

use super::common::UseCaseMetadata;

pub use request::SmsRequest;
pub use summary::{BulkSendSummary, SendFailure};

pub struct SendSms;

impl UseCaseMetadata for SendSms {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "send_sms"
    }

    fn display_name() -> &'static str {
        "Send SMS"
    }

    fn description() -> &'static str {
        "Send a plain-text SMS to a single number or to every selected recipient"
    }
}
