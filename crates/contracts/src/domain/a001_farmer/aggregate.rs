use crate::shared::envelope::ListPage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Farmer record as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, alias = "farmerName")]
    pub name: String,
    #[serde(default, alias = "mobile", alias = "phone", alias = "contactNumber")]
    pub mobile_number: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
    #[serde(default, rename = "opt_in", alias = "optIn")]
    pub opt_in: bool,
}

impl Farmer {
    /// Keys under which farmer list endpoints return their items
    pub const ITEMS_KEYS: &'static [&'static str] = &["farmers", "items", "results"];
}

pub type FarmerListResponse = ListPage<Farmer>;

/// Farmer page from any of the list envelopes the backend returns
pub fn parse_farmer_list(body: &Value, page: usize, limit: usize) -> FarmerListResponse {
    ListPage::from_body(body, Farmer::ITEMS_KEYS, page, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_farmer_list_nested_envelope() {
        let body = json!({
            "success": true,
            "data": {
                "farmers": [
                    {"_id": "a1", "name": "Ramesh", "mobileNumber": "9876543210"},
                    {"_id": "a2", "name": "Sunita", "mobile": "9123456789"}
                ],
                "pagination": {"total": 120, "totalPages": 3, "hasNextPage": true}
            }
        });
        let page = parse_farmer_list(&body, 1, 50);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].mobile_number, "9123456789");
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let raw = r#"{"_id":"64b7f0c2a1e4d3b2c1a09f8e","name":"Ramesh","mobileNumber":"9876543210","village":"Wai","taluka":"Wai","district":"Satara","state":"Maharashtra","opt_in":true}"#;
        let farmer: Farmer = serde_json::from_str(raw).unwrap();
        assert_eq!(farmer.id, "64b7f0c2a1e4d3b2c1a09f8e");
        assert_eq!(farmer.mobile_number, "9876543210");
        assert!(farmer.opt_in);
    }

    #[test]
    fn test_missing_fields_default() {
        let farmer: Farmer = serde_json::from_str(r#"{"_id":"x","mobile":"9876543210"}"#).unwrap();
        assert_eq!(farmer.mobile_number, "9876543210");
        assert!(farmer.village.is_empty());
        assert!(!farmer.opt_in);
    }
}
