use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomParam {
    pub name: String,
    pub value: String,
}

/// Per-recipient parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactParams {
    pub phone: String,
    pub name: String,
    pub custom_params: Vec<CustomParam>,
}

/// Bulk template send, one parameter set per contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTemplateMessagesRequest {
    pub template_name: String,
    pub broadcast_name: String,
    pub language_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_number: Option<String>,
    pub contacts: Vec<ContactParams>,
}

/// Single-recipient template send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTemplateMessageRequest {
    pub template_name: String,
    pub broadcast_name: String,
    pub language_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_number: Option<String>,
    pub phone: String,
    pub parameters: Vec<CustomParam>,
}

impl SendTemplateMessagesRequest {
    /// Campaign name falls back to the template name
    pub fn broadcast_name_or_template(name: &str, template_name: &str) -> String {
        if name.trim().is_empty() {
            template_name.to_string()
        } else {
            name.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let req = SendTemplateMessagesRequest {
            template_name: "offer".into(),
            broadcast_name: "Kharif".into(),
            language_code: "en".into(),
            channel_number: None,
            contacts: vec![ContactParams {
                phone: "919876543210".into(),
                name: "Ramesh".into(),
                custom_params: vec![CustomParam {
                    name: "village".into(),
                    value: "Wai".into(),
                }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "templateName": "offer",
                "broadcastName": "Kharif",
                "languageCode": "en",
                "contacts": [{
                    "phone": "919876543210",
                    "name": "Ramesh",
                    "customParams": [{"name": "village", "value": "Wai"}]
                }]
            })
        );
    }

    #[test]
    fn test_broadcast_name_fallback() {
        assert_eq!(SendTemplateMessagesRequest::broadcast_name_or_template("  ", "offer"), "offer");
        assert_eq!(SendTemplateMessagesRequest::broadcast_name_or_template(" Rabi ", "offer"), "Rabi");
    }
}
