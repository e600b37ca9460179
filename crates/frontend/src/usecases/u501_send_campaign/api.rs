use crate::shared::network::{api, ApiError, NetworkManager};
use contracts::domain::a007_message_template::MessageTemplate;
use contracts::shared::envelope::extract_items;
use contracts::usecases::u501_send_campaign::{
    CampaignHistoryEntry, SendResult, SendTemplateMessagesRequest,
};
use serde_json::json;

/// Approved templates; entries that fail to decode are skipped
pub async fn fetch_templates() -> Result<Vec<MessageTemplate>, ApiError> {
    let body = NetworkManager::new(api::TEMPLATES_LIST).call().await?;
    let templates: Vec<MessageTemplate> = extract_items(&body, MessageTemplate::ITEMS_KEYS)
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .filter(|t: &MessageTemplate| !t.name.is_empty())
        .collect();
    log::debug!("loaded {} templates", templates.len());
    Ok(templates)
}

/// One bulk send; a rejected body comes back as a failed `SendResult`
pub async fn send_template_messages(req: &SendTemplateMessagesRequest) -> SendResult {
    match NetworkManager::new(api::SEND_TEMPLATE_MESSAGES).send(req).await {
        Ok(body) => SendResult::from_body(&body),
        Err(e) => SendResult::failed(e.message_or("Failed to send the campaign")),
    }
}

/// Campaign history for stored farmers. Failures are only logged.
pub async fn record_history(entries: Vec<CampaignHistoryEntry>) {
    if entries.is_empty() {
        return;
    }
    let count = entries.len();
    match NetworkManager::new(api::FARMERS_CAMPAIGN_HISTORY)
        .send(&json!({ "entries": entries }))
        .await
    {
        Ok(_) => log::debug!("recorded campaign history for {} farmers", count),
        Err(e) => log::warn!("campaign history not recorded: {}", e),
    }
}
