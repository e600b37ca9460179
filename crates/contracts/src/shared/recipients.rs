//! Recipient records gathered from heterogeneous sources and the
//! de-duplicated selection built from them.
//!
//! Every source is normalized to [`Recipient`]; the selection is keyed by the
//! 10-digit subscriber number so the same person reached through two sources
//! is only messaged once.

use super::phone::{normalize_phone, parse_manual_phone, PhoneError};
use crate::domain::a001_farmer::Farmer;
use crate::domain::a002_public_lead::PublicLead;
use crate::domain::a003_sales_customer::SalesCustomer;
use crate::domain::a004_broadcast_list::ListMember;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientSource {
    Farmer,
    Sales,
    PublicLead,
    Manual,
    List,
}

impl RecipientSource {
    pub fn label(&self) -> &'static str {
        match self {
            RecipientSource::Farmer => "Farmer",
            RecipientSource::Sales => "Sales",
            RecipientSource::PublicLead => "Public link",
            RecipientSource::Manual => "Manual",
            RecipientSource::List => "Saved list",
        }
    }
}

/// Common shape of every recipient source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub village: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
    pub opt_in: bool,
    pub link_name: Option<String>,
    pub source: Option<RecipientSource>,
}

impl Recipient {
    /// Selection key: normalized phone, or the id when no phone is known
    pub fn dedup_key(&self) -> String {
        let phone = normalize_phone(&self.phone);
        if phone.is_empty() {
            format!("id:{}", self.id)
        } else {
            phone
        }
    }

    /// Recipient typed in by the operator; the phone must already be normalized
    pub fn manual(phone: &str) -> Self {
        Self {
            id: format!("manual-{}", phone),
            name: String::new(),
            phone: phone.to_string(),
            source: Some(RecipientSource::Manual),
            ..Default::default()
        }
    }

    /// Member of a contact list
    pub fn from_list_member(member: &ListMember, list_id: &str) -> Self {
        let phone = normalize_phone(&member.phone);
        Self {
            id: format!("{}-{}", list_id, phone),
            name: member.name.clone(),
            phone,
            source: Some(RecipientSource::List),
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.phone
        } else {
            &self.name
        }
    }

    /// Value of a named recipient field, used for template personalization
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name.to_ascii_lowercase().as_str() {
            "name" | "farmer_name" | "farmername" | "customer_name" => &self.name,
            "village" => &self.village,
            "taluka" => &self.taluka,
            "district" => &self.district,
            "state" => &self.state,
            "number" | "mobile" | "phone" | "mobile_number" | "mobilenumber" => &self.phone,
            _ => return None,
        };
        Some(value.as_str())
    }
}

impl From<&Farmer> for Recipient {
    fn from(f: &Farmer) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            phone: normalize_phone(&f.mobile_number),
            village: f.village.clone(),
            taluka: f.taluka.clone(),
            district: f.district.clone(),
            state: f.state.clone(),
            opt_in: f.opt_in,
            link_name: None,
            source: Some(RecipientSource::Farmer),
        }
    }
}

impl From<&SalesCustomer> for Recipient {
    fn from(c: &SalesCustomer) -> Self {
        Self {
            id: c.id.clone(),
            name: c.customer_name.clone(),
            phone: normalize_phone(&c.mobile),
            village: c.village.clone(),
            taluka: c.taluka.clone(),
            district: c.district.clone(),
            state: c.state.clone(),
            opt_in: true,
            link_name: None,
            source: Some(RecipientSource::Sales),
        }
    }
}

impl From<&PublicLead> for Recipient {
    fn from(l: &PublicLead) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            phone: normalize_phone(&l.mobile_number),
            village: l.village.clone(),
            taluka: l.taluka.clone(),
            district: l.district.clone(),
            state: l.state.clone(),
            opt_in: true,
            link_name: l.link_name.clone(),
            source: Some(RecipientSource::PublicLead),
        }
    }
}

/// Keep the first record of every phone number, preserving order
pub fn dedupe_by_phone(records: Vec<Recipient>) -> Vec<Recipient> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.dedup_key()))
        .collect()
}

/// Result of a manual add that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualAddOutcome {
    Added,
    /// Already selected or present in a loaded source; nothing changed
    Duplicate,
    /// The selection comes from saved lists and cannot take typed numbers
    ListModeLocked,
}

/// The operator's recipient selection.
///
/// Invariant: no two entries share a de-duplication key. In list mode the
/// selection is exactly the union of the chosen saved lists and cannot be
/// edited row by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedRecipients {
    items: Vec<Recipient>,
    list_mode: bool,
}

impl SelectedRecipients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipient> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Recipient] {
        &self.items
    }

    pub fn is_list_mode(&self) -> bool {
        self.list_mode
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.iter().any(|r| r.dedup_key() == key)
    }

    pub fn is_selected(&self, record: &Recipient) -> bool {
        self.contains_key(&record.dedup_key())
    }

    /// Append unless an entry with the same key exists. Returns whether it was added.
    pub fn add(&mut self, record: Recipient) -> bool {
        if self.list_mode || self.is_selected(&record) {
            return false;
        }
        self.items.push(record);
        true
    }

    pub fn remove(&mut self, id: &str) {
        if self.list_mode {
            return;
        }
        self.items.retain(|r| r.id != id);
    }

    /// Row checkbox: add when absent, remove when present. No-op in list mode.
    pub fn toggle(&mut self, record: &Recipient) {
        if self.list_mode {
            return;
        }
        let key = record.dedup_key();
        if self.contains_key(&key) {
            self.items.retain(|r| r.dedup_key() != key);
        } else {
            self.items.push(record.clone());
        }
    }

    /// Records the selector table shows: the list members themselves in
    /// list mode, otherwise the loaded source page.
    pub fn table_rows<'a>(&'a self, page: &'a [Recipient]) -> &'a [Recipient] {
        if self.list_mode {
            &self.items
        } else {
            page
        }
    }

    /// Every visible record already selected?
    pub fn all_selected(&self, page: &[Recipient]) -> bool {
        !page.is_empty() && page.iter().all(|r| self.is_selected(r))
    }

    /// Header checkbox over the visible page only: deselect the page when it
    /// is fully selected, otherwise select the missing records. Deselecting
    /// removes the page's own records by id; picks from other sources that
    /// share a number stay.
    pub fn select_all(&mut self, page: &[Recipient]) {
        if self.list_mode || page.is_empty() {
            return;
        }
        if self.all_selected(page) {
            let ids: HashSet<&str> = page.iter().map(|r| r.id.as_str()).collect();
            self.items.retain(|r| !ids.contains(r.id.as_str()));
        } else {
            for record in page {
                self.add(record.clone());
            }
        }
    }

    /// Add a typed number. Invalid input is an error; a number already
    /// selected or present in `loaded` is silently skipped.
    pub fn add_manual(
        &mut self,
        raw: &str,
        loaded: &[Recipient],
    ) -> Result<ManualAddOutcome, PhoneError> {
        let phone = parse_manual_phone(raw)?;
        if self.list_mode {
            return Ok(ManualAddOutcome::ListModeLocked);
        }
        let exists = self.contains_key(&phone) || loaded.iter().any(|r| r.dedup_key() == phone);
        if exists {
            return Ok(ManualAddOutcome::Duplicate);
        }
        self.items.push(Recipient::manual(&phone));
        Ok(ManualAddOutcome::Added)
    }

    /// Replace the whole selection with the members of the chosen lists
    pub fn replace_from_lists(&mut self, members: Vec<Recipient>) {
        self.items = dedupe_by_phone(members);
        self.list_mode = true;
    }

    /// Leave list mode; the list-derived selection is dropped
    pub fn exit_list_mode(&mut self) {
        self.list_mode = false;
        self.items.clear();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, phone: &str) -> Recipient {
        Recipient {
            id: id.to_string(),
            name: format!("Farmer {}", id),
            phone: phone.to_string(),
            source: Some(RecipientSource::Farmer),
            ..Default::default()
        }
    }

    fn assert_unique(sel: &SelectedRecipients) {
        let keys: HashSet<String> = sel.iter().map(Recipient::dedup_key).collect();
        assert_eq!(keys.len(), sel.len());
    }

    #[test]
    fn test_add_dedups_by_normalized_phone() {
        let mut sel = SelectedRecipients::new();
        assert!(sel.add(rec("a", "9876543210")));
        assert!(!sel.add(rec("b", "+91 98765 43210")));
        assert!(!sel.add(rec("c", "09876543210")));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut sel = SelectedRecipients::new();
        sel.add(rec("a", "9876543210"));
        sel.add(rec("b", "9123456789"));
        sel.remove("a");
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.as_slice()[0].id, "b");
    }

    #[test]
    fn test_select_all_toggle_symmetry() {
        let page = vec![rec("a", "9876543210"), rec("b", "9123456789")];
        let mut sel = SelectedRecipients::new();
        sel.add(rec("z", "9000000001"));
        let before = sel.clone();

        sel.select_all(&page);
        assert_eq!(sel.len(), 3);
        sel.select_all(&page);
        assert_eq!(sel, before);
    }

    #[test]
    fn test_select_all_keeps_pick_from_other_source() {
        let sales = Recipient {
            source: Some(RecipientSource::Sales),
            ..rec("sales-1", "9876543210")
        };
        let page = vec![rec("farmer-1", "+91 98765 43210"), rec("farmer-2", "9123456789")];
        let mut sel = SelectedRecipients::new();
        sel.add(sales);
        let visible =
            |sel: &SelectedRecipients| page.iter().map(|r| sel.is_selected(r)).collect::<Vec<_>>();
        assert_eq!(visible(&sel), vec![true, false]);

        sel.select_all(&page);
        assert!(sel.all_selected(&page));
        assert_eq!(sel.len(), 2);

        sel.select_all(&page);
        let ids: Vec<&str> = sel.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["sales-1"]);
        assert_eq!(visible(&sel), vec![true, false]);
    }

    #[test]
    fn test_select_all_with_partial_selection_adds_missing() {
        let page = vec![rec("a", "9876543210"), rec("b", "9123456789")];
        let mut sel = SelectedRecipients::new();
        sel.add(page[0].clone());
        sel.select_all(&page);
        assert_eq!(sel.len(), 2);
        assert!(sel.all_selected(&page));
    }

    #[test]
    fn test_manual_add_scenario() {
        let mut sel = SelectedRecipients::new();
        let outcome = sel.add_manual("+91 98765 43210", &[]).unwrap();
        assert_eq!(outcome, ManualAddOutcome::Added);
        assert_eq!(sel.as_slice()[0].phone, "9876543210");
        assert_eq!(sel.as_slice()[0].source, Some(RecipientSource::Manual));

        let outcome = sel.add_manual("9876543210", &[]).unwrap();
        assert_eq!(outcome, ManualAddOutcome::Duplicate);
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_manual_add_rejects_bad_input() {
        let mut sel = SelectedRecipients::new();
        assert!(sel.add_manual("12345", &[]).is_err());
        assert!(sel.add_manual("", &[]).is_err());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_manual_add_skips_number_in_loaded_source() {
        let mut sel = SelectedRecipients::new();
        let loaded = vec![rec("a", "919876543210")];
        assert_eq!(
            sel.add_manual("9876543210", &loaded).unwrap(),
            ManualAddOutcome::Duplicate
        );
        assert!(sel.is_empty());
    }

    #[test]
    fn test_list_mode_replaces_and_locks_selection() {
        let mut sel = SelectedRecipients::new();
        sel.add(rec("x", "9000000001"));
        sel.replace_from_lists(vec![
            rec("a", "9876543210"),
            rec("b", "919876543210"),
            rec("c", "9123456789"),
        ]);
        assert!(sel.is_list_mode());
        assert_eq!(sel.len(), 2);
        assert_unique(&sel);
        assert_eq!(
            sel.add_manual("9333333333", &[]).unwrap(),
            ManualAddOutcome::ListModeLocked
        );
        assert_eq!(
            sel.add_manual("9876543210", &[]).unwrap(),
            ManualAddOutcome::ListModeLocked
        );
        assert!(sel.add_manual("123", &[]).is_err());

        let snapshot = sel.clone();
        sel.toggle(&rec("a", "9876543210"));
        sel.toggle(&rec("d", "9111111111"));
        sel.select_all(&[rec("e", "9222222222")]);
        assert_eq!(sel, snapshot);

        let page = vec![rec("p", "9444444444")];
        let rows: Vec<&str> = sel.table_rows(&page).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(rows, vec!["a", "c"]);

        sel.exit_list_mode();
        assert_eq!(sel.table_rows(&page)[0].id, "p");
        assert!(!sel.is_list_mode());
        assert!(sel.is_empty());
    }

    #[test]
    fn test_dedup_invariant_over_mixed_operations() {
        let mut sel = SelectedRecipients::new();
        let page = vec![rec("a", "9876543210"), rec("b", "09123456789")];
        sel.select_all(&page);
        sel.add(rec("c", "+919123456789"));
        let _ = sel.add_manual("919876543210", &page);
        let _ = sel.add_manual("9555555555", &page);
        sel.toggle(&rec("d", "9555555555"));
        sel.toggle(&rec("e", "9666666666"));
        assert_unique(&sel);
        assert_eq!(sel.len(), 3);
    }

    #[test]
    fn test_field_lookup_is_case_insensitive() {
        let r = Recipient {
            village: "Wai".into(),
            ..rec("a", "9876543210")
        };
        assert_eq!(r.field("Village"), Some("Wai"));
        assert_eq!(r.field("number"), Some("9876543210"));
        assert_eq!(r.field("crop"), None);
    }

    #[test]
    fn test_conversion_normalizes_phone() {
        let farmer = Farmer {
            id: "f1".into(),
            name: "Ramesh".into(),
            mobile_number: "+91 98765 43210".into(),
            ..Default::default()
        };
        let r = Recipient::from(&farmer);
        assert_eq!(r.phone, "9876543210");
        assert_eq!(r.source, Some(RecipientSource::Farmer));
    }
}
