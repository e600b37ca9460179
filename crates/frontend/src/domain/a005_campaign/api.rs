use crate::shared::network::{api, ApiError, NetworkManager};
use contracts::domain::a005_campaign::Campaign;
use contracts::shared::envelope::{extract_record, ListPage};
use contracts::shared::list_query::ListQuery;

pub async fn fetch_campaigns(query: &ListQuery) -> Result<ListPage<Campaign>, ApiError> {
    let body = NetworkManager::new(api::BROADCASTS_LIST).fetch(query).await?;
    Ok(ListPage::from_body(
        &body,
        Campaign::ITEMS_KEYS,
        query.page,
        query.limit,
    ))
}

pub async fn fetch_campaign(id: &str) -> Result<Campaign, ApiError> {
    let body = NetworkManager::new(api::BROADCAST_GET).with_id(id).call().await?;
    extract_record(&body, &["broadcast", "campaign"])
        .ok_or_else(|| ApiError::Decode(format!("campaign {} has an unexpected shape", id)))
}
