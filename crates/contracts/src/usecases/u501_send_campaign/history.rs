use crate::shared::phone::is_object_id;
use crate::shared::recipients::Recipient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Campaign history row recorded against a farmer after a successful send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignHistoryEntry {
    pub farmer_id: String,
    pub campaign_name: String,
    pub template_name: String,
    pub sent_at: DateTime<Utc>,
}

/// History rows for the recipients that exist in the backend.
/// Manually typed and list-derived recipients carry synthetic ids and are skipped.
pub fn history_entries(
    recipients: &[Recipient],
    campaign_name: &str,
    template_name: &str,
    sent_at: DateTime<Utc>,
) -> Vec<CampaignHistoryEntry> {
    recipients
        .iter()
        .filter(|r| is_object_id(&r.id))
        .map(|r| CampaignHistoryEntry {
            farmer_id: r.id.clone(),
            campaign_name: campaign_name.to_string(),
            template_name: template_name.to_string(),
            sent_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_backend_ids_get_history() {
        let recipients = vec![
            Recipient {
                id: "64b7f0c2a1e4d3b2c1a09f8e".into(),
                phone: "9876543210".into(),
                ..Default::default()
            },
            Recipient::manual("9123456789"),
        ];
        let entries = history_entries(&recipients, "Kharif", "offer", Utc::now());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].farmer_id, "64b7f0c2a1e4d3b2c1a09f8e");
    }
}
