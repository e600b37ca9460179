use crate::domain::a001_farmer::Farmer;
use crate::shared::envelope::extract_record;
use crate::shared::phone::{is_object_id, normalize_phone};
use crate::shared::recipients::{Recipient, RecipientSource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which backend collection a saved list belongs to.
///
/// Farmer lists reference stored farmers; contact lists hold free
/// `{phone, name}` pairs. The two live in different endpoint families and id
/// namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListKind {
    FarmerList,
    ContactList,
}

impl ListKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ListKind::FarmerList => "Farmer list",
            ListKind::ContactList => "Contact list",
        }
    }

    /// Classify a list id by membership in the two loaded collections.
    /// Farmer lists win when an id appears in both.
    pub fn classify(
        id: &str,
        farmer_lists: &[BroadcastList],
        contact_lists: &[BroadcastList],
    ) -> Option<ListKind> {
        if farmer_lists.iter().any(|l| l.id == id) {
            Some(ListKind::FarmerList)
        } else if contact_lists.iter().any(|l| l.id == id) {
            Some(ListKind::ContactList)
        } else {
            None
        }
    }
}

/// A `{phone, name}` entry of a contact list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListMember {
    #[serde(default, alias = "mobileNumber", alias = "mobile")]
    pub phone: String,
    #[serde(default)]
    pub name: String,
}

/// Saved recipient group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastList {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contacts: Vec<ListMember>,
    #[serde(default)]
    pub farmers: Vec<Farmer>,
    /// Count reported by list summaries that omit the members
    #[serde(default, alias = "contactCount", alias = "farmerCount")]
    pub member_count: Option<usize>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BroadcastList {
    pub const ITEMS_KEYS: &'static [&'static str] = &["lists", "broadcastLists", "items"];

    pub fn size(&self) -> usize {
        let loaded = self.contacts.len() + self.farmers.len();
        if loaded > 0 {
            loaded
        } else {
            self.member_count.unwrap_or(0)
        }
    }

    /// Single list from a detail response, wrapped or bare
    pub fn from_body(body: &Value) -> Option<Self> {
        extract_record(body, &["list", "farmerList", "contactList", "broadcastList"])
    }

    /// Members as recipients: stored farmers keep their ids, free contacts
    /// get ids derived from the list
    pub fn members(&self) -> Vec<Recipient> {
        self.farmers
            .iter()
            .map(Recipient::from)
            .chain(
                self.contacts
                    .iter()
                    .map(|m| Recipient::from_list_member(m, &self.id)),
            )
            .collect()
    }
}

/// Reference to a saved list together with its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListRef {
    pub id: String,
    pub kind: ListKind,
}

/// Body for creating or updating a list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBroadcastListDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Farmer ids, for farmer lists
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub farmer_ids: Vec<String>,
    /// Free contacts, for contact lists
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contacts: Vec<ListMember>,
}

impl SaveBroadcastListDto {
    /// Body for a list of `kind` built from picked recipients. Farmer lists
    /// can only reference stored farmers; the number of records left out is
    /// returned alongside.
    pub fn from_selection(
        kind: ListKind,
        name: &str,
        description: &str,
        selection: &[Recipient],
    ) -> (Self, usize) {
        let description = Some(description.trim().to_string()).filter(|d| !d.is_empty());
        let mut dto = Self {
            name: name.trim().to_string(),
            description,
            ..Default::default()
        };
        let mut skipped = 0;
        for r in selection {
            match kind {
                ListKind::FarmerList => {
                    if r.source == Some(RecipientSource::Farmer) && is_object_id(&r.id) {
                        dto.farmer_ids.push(r.id.clone());
                    } else {
                        skipped += 1;
                    }
                }
                ListKind::ContactList => dto.contacts.push(ListMember {
                    phone: normalize_phone(&r.phone),
                    name: r.name.clone(),
                }),
            }
        }
        (dto, skipped)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("List name is required".to_string());
        }
        if self.farmer_ids.is_empty() && self.contacts.is_empty() {
            return Err("Select at least one recipient".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        for c in &self.contacts {
            let key = normalize_phone(&c.phone);
            if key.len() != 10 {
                return Err(format!("Invalid phone number: {}", c.phone));
            }
            if !seen.insert(key) {
                return Err(format!("Duplicate phone number: {}", c.phone));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_selection_farmer_list_skips_non_farmers() {
        let farmer = Recipient {
            id: "64b7f0c2a1e4d3b2c1a09f8e".into(),
            phone: "9876543210".into(),
            source: Some(RecipientSource::Farmer),
            ..Default::default()
        };
        let manual = Recipient::manual("9123456789");
        let picked = vec![farmer, manual];

        let (dto, skipped) =
            SaveBroadcastListDto::from_selection(ListKind::FarmerList, " Wai ", "", &picked);
        assert_eq!(dto.name, "Wai");
        assert_eq!(dto.description, None);
        assert_eq!(dto.farmer_ids, vec!["64b7f0c2a1e4d3b2c1a09f8e".to_string()]);
        assert_eq!(skipped, 1);

        let (dto, skipped) =
            SaveBroadcastListDto::from_selection(ListKind::ContactList, "Wai", "growers", &picked);
        assert_eq!(dto.contacts.len(), 2);
        assert_eq!(skipped, 0);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_from_body_and_members() {
        let body = json!({
            "success": true,
            "data": {
                "list": {
                    "_id": "l1",
                    "name": "Wai growers",
                    "farmers": [{"_id": "64b7f0c2a1e4d3b2c1a09f8e", "name": "Ramesh", "mobileNumber": "919876543210"}],
                    "contacts": [{"phone": "09123456789", "name": "Sunita"}]
                }
            }
        });
        let list = BroadcastList::from_body(&body).unwrap();
        assert_eq!(list.name, "Wai growers");
        let members = list.members();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, "64b7f0c2a1e4d3b2c1a09f8e");
        assert_eq!(members[0].phone, "9876543210");
        assert_eq!(members[1].phone, "9123456789");
    }

    fn list(id: &str) -> BroadcastList {
        BroadcastList {
            id: id.to_string(),
            name: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify() {
        let farmer_lists = vec![list("f1")];
        let contact_lists = vec![list("c1")];
        assert_eq!(
            ListKind::classify("f1", &farmer_lists, &contact_lists),
            Some(ListKind::FarmerList)
        );
        assert_eq!(
            ListKind::classify("c1", &farmer_lists, &contact_lists),
            Some(ListKind::ContactList)
        );
        assert_eq!(ListKind::classify("zz", &farmer_lists, &contact_lists), None);
    }

    #[test]
    fn test_validate_requires_name_and_members() {
        let mut dto = SaveBroadcastListDto::default();
        assert!(dto.validate().is_err());
        dto.name = "Wai farmers".into();
        assert_eq!(dto.validate(), Err("Select at least one recipient".to_string()));
        dto.farmer_ids.push("64b7f0c2a1e4d3b2c1a09f8e".into());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_contacts() {
        let dto = SaveBroadcastListDto {
            name: "Dealers".into(),
            contacts: vec![
                ListMember { phone: "9876543210".into(), name: "A".into() },
                ListMember { phone: "+91 98765 43210".into(), name: "B".into() },
            ],
            ..Default::default()
        };
        assert!(dto.validate().unwrap_err().starts_with("Duplicate"));
    }

    #[test]
    fn test_size_prefers_loaded_members() {
        let mut l = list("x");
        l.member_count = Some(12);
        assert_eq!(l.size(), 12);
        l.contacts.push(ListMember::default());
        assert_eq!(l.size(), 1);
    }
}
