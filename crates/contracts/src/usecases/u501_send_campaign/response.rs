use crate::shared::envelope::{error_message, is_success};
use serde_json::Value;

/// Outcome of a send call as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub success: bool,
    pub error: Option<String>,
}

impl SendResult {
    pub fn from_body(body: &Value) -> Self {
        if is_success(body) {
            Self {
                success: true,
                error: None,
            }
        } else {
            Self {
                success: false,
                error: Some(error_message(body).unwrap_or_else(|| "Send failed".to_string())),
            }
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body() {
        assert!(SendResult::from_body(&json!({"success": true})).success);
        let failed = SendResult::from_body(&json!({"success": false, "message": "Template not approved"}));
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("Template not approved"));
        assert_eq!(
            SendResult::from_body(&json!({"success": false})).error.as_deref(),
            Some("Send failed")
        );
    }
}
