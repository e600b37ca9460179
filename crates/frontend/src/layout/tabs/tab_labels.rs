//! Tab titles, keyed by tab key. Unknown keys fall back to a generic title.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_send_campaign::SendCampaign;
use contracts::usecases::u502_send_sms::SendSms;

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a004_broadcast_list" => "Broadcast lists",
        "a005_campaign" => "Campaigns",
        "a006_agri_sales_order" => "Agri sales orders",

        // ── Use cases ─────────────────────────────────────────────────────
        "u501_send_campaign" => SendCampaign::display_name(),
        "u502_send_sms" => SendSms::display_name(),

        // ── Dashboards ────────────────────────────────────────────────────
        "d400_outstanding" => "Outstanding",

        _ => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("u501_send_campaign"), "Farmer campaign");
        assert_eq!(tab_label_for_key("d400_outstanding"), "Outstanding");
        assert_eq!(tab_label_for_key("nope"), "Page");
    }
}
