use crate::shared::phone::to_msisdn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsRequest {
    pub to: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
}

impl SmsRequest {
    pub fn new(phone: &str, body: &str) -> Self {
        Self {
            to: to_msisdn(phone),
            body: body.trim().to_string(),
            sender: None,
        }
    }

    pub fn with_sender(mut self, sender: &str) -> Self {
        let sender = sender.trim();
        if !sender.is_empty() {
            self.sender = Some(sender.to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_normalizes_recipient() {
        let req = SmsRequest::new("098765 43210", " Rain expected tomorrow ").with_sender(" ");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"to": "919876543210", "body": "Rain expected tomorrow"})
        );
        assert_eq!(req.with_sender("AGRIMK").sender.as_deref(), Some("AGRIMK"));
    }
}
