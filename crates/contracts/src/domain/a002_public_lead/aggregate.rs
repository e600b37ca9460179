use serde::{Deserialize, Serialize};

/// Contact captured through a public self-registration link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicLead {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "mobile", alias = "phone")]
    pub mobile_number: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
    /// Name of the link the lead registered through
    #[serde(default, alias = "link_name")]
    pub link_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PublicLead {
    pub const ITEMS_KEYS: &'static [&'static str] = &["leads", "items", "data"];
}

/// Public registration link, used to filter leads by provenance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicLink {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, alias = "linkName")]
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

impl PublicLink {
    pub const ITEMS_KEYS: &'static [&'static str] = &["links", "items"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_lead_with_link_name() {
        let raw = r#"{"_id":"a","name":"Sunita","mobileNumber":"9123456789","linkName":"Kharif Mela"}"#;
        let lead: PublicLead = serde_json::from_str(raw).unwrap();
        assert_eq!(lead.link_name.as_deref(), Some("Kharif Mela"));
    }
}
