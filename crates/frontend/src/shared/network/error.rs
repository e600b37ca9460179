use contracts::shared::envelope::error_message;
use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call, carrying what the operator should read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx response; `message` is the backend's own text when it sent one
    #[error("Request failed with status code {status}")]
    Http { status: u16, message: Option<String> },
    /// 2xx response with an explicit failure flag
    #[error("{0}")]
    Rejected(String),
    /// Body could not be read as the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        ApiError::Http {
            status,
            message: body.and_then(error_message),
        }
    }

    pub fn rejected(body: &Value) -> Self {
        ApiError::Rejected(error_message(body).unwrap_or_else(|| "Request was rejected".to_string()))
    }

    /// Backend text first, then the transport text, then `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(m), ..
            }
            | ApiError::Rejected(m) => m.clone(),
            ApiError::Http { .. } | ApiError::Transport(_) => self.to_string(),
            ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_preference() {
        let with_body = ApiError::from_response(400, Some(&json!({"message": "Order already dispatched"})));
        assert_eq!(with_body.message_or("Could not dispatch"), "Order already dispatched");

        let without_body = ApiError::from_response(500, None);
        assert_eq!(
            without_body.message_or("Could not dispatch"),
            "Request failed with status code 500"
        );

        let decode = ApiError::Decode("eof".into());
        assert_eq!(decode.message_or("Could not dispatch"), "Could not dispatch");
    }
}
