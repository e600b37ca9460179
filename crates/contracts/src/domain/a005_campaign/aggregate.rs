use serde::{Deserialize, Serialize};

/// Per-contact delivery status reported by the messaging backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Delivered,
    Read,
    Failed,
    #[serde(other)]
    Unknown,
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        DeliveryStatus::Pending
    }
}

impl DeliveryStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Sent => "Sent",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Read => "Read",
            DeliveryStatus::Failed => "Failed",
            DeliveryStatus::Unknown => "Unknown",
        }
    }

    /// No further status change is expected
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Read | DeliveryStatus::Failed)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DeliveryStatus::Read | DeliveryStatus::Delivered => "badge--success",
            DeliveryStatus::Sent => "badge--primary",
            DeliveryStatus::Failed => "badge--error",
            DeliveryStatus::Pending | DeliveryStatus::Unknown => "badge--neutral",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: DeliveryStatus,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Aggregate counters. Delivered includes read; sent includes delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCounts {
    #[serde(default)]
    pub sent: usize,
    #[serde(default)]
    pub delivered: usize,
    #[serde(default)]
    pub read: usize,
    #[serde(default)]
    pub failed: usize,
}

impl DeliveryCounts {
    pub fn from_contacts(contacts: &[CampaignContact]) -> Self {
        let mut counts = Self::default();
        for c in contacts {
            match c.status {
                DeliveryStatus::Read => {
                    counts.read += 1;
                    counts.delivered += 1;
                    counts.sent += 1;
                }
                DeliveryStatus::Delivered => {
                    counts.delivered += 1;
                    counts.sent += 1;
                }
                DeliveryStatus::Sent => counts.sent += 1,
                DeliveryStatus::Failed => counts.failed += 1,
                DeliveryStatus::Pending | DeliveryStatus::Unknown => {}
            }
        }
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.sent == 0 && self.delivered == 0 && self.read == 0 && self.failed == 0
    }
}

/// One outbound template-message send job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default, alias = "broadcastName")]
    pub name: String,
    #[serde(default)]
    pub template_name: String,
    #[serde(default)]
    pub contacts: Vec<CampaignContact>,
    #[serde(default)]
    pub counts: Option<DeliveryCounts>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Campaign {
    pub const ITEMS_KEYS: &'static [&'static str] = &["broadcasts", "campaigns", "items"];

    /// Backend counters when present, otherwise derived from contact statuses
    pub fn counts(&self) -> DeliveryCounts {
        match self.counts {
            Some(c) if !c.is_empty() => c,
            _ => DeliveryCounts::from_contacts(&self.contacts),
        }
    }

    /// Every contact reached a terminal status
    pub fn is_finished(&self) -> bool {
        !self.contacts.is_empty() && self.contacts.iter().all(|c| c.status.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(status: DeliveryStatus) -> CampaignContact {
        CampaignContact {
            phone: "919876543210".into(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_counts_derived_from_contacts() {
        let campaign = Campaign {
            contacts: vec![
                contact(DeliveryStatus::Read),
                contact(DeliveryStatus::Delivered),
                contact(DeliveryStatus::Sent),
                contact(DeliveryStatus::Failed),
                contact(DeliveryStatus::Pending),
            ],
            ..Default::default()
        };
        let counts = campaign.counts();
        assert_eq!(counts.sent, 3);
        assert_eq!(counts.delivered, 2);
        assert_eq!(counts.read, 1);
        assert_eq!(counts.failed, 1);
    }

    #[test]
    fn test_backend_counts_win() {
        let campaign = Campaign {
            counts: Some(DeliveryCounts { sent: 10, delivered: 8, read: 2, failed: 1 }),
            contacts: vec![contact(DeliveryStatus::Sent)],
            ..Default::default()
        };
        assert_eq!(campaign.counts().sent, 10);
    }

    #[test]
    fn test_unknown_status_deserializes() {
        let c: CampaignContact =
            serde_json::from_str(r#"{"phone":"1","status":"queued_at_provider"}"#).unwrap();
        assert_eq!(c.status, DeliveryStatus::Unknown);
    }

    #[test]
    fn test_is_finished() {
        let mut campaign = Campaign::default();
        assert!(!campaign.is_finished());
        campaign.contacts = vec![contact(DeliveryStatus::Read), contact(DeliveryStatus::Failed)];
        assert!(campaign.is_finished());
        campaign.contacts.push(contact(DeliveryStatus::Delivered));
        assert!(!campaign.is_finished());
    }
}
