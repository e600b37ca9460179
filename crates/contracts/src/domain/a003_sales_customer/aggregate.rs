use serde::{Deserialize, Serialize};

/// Customer derived from historical sales records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesCustomer {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, alias = "name")]
    pub customer_name: String,
    #[serde(default, alias = "mobileNumber", alias = "customerMobile", alias = "phone")]
    pub mobile: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub taluka: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub last_order_date: Option<String>,
}

impl SalesCustomer {
    pub const ITEMS_KEYS: &'static [&'static str] = &["customers", "items"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        let raw = r#"{"_id":"c1","name":"Ganesh","customerMobile":"9988776655","totalOrders":4}"#;
        let c: SalesCustomer = serde_json::from_str(raw).unwrap();
        assert_eq!(c.customer_name, "Ganesh");
        assert_eq!(c.mobile, "9988776655");
        assert_eq!(c.total_orders, 4);
    }
}
