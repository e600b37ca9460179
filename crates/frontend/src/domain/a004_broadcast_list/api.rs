use crate::shared::network::{api, ApiError, Endpoint, NetworkManager};
use contracts::domain::a004_broadcast_list::{BroadcastList, ListKind, ListRef, SaveBroadcastListDto};
use contracts::shared::envelope::extract_items;

struct ListEndpoints {
    list: Endpoint,
    get: Endpoint,
    create: Endpoint,
    update: Endpoint,
    delete: Endpoint,
}

fn endpoints(kind: ListKind) -> ListEndpoints {
    match kind {
        ListKind::FarmerList => ListEndpoints {
            list: api::FARMER_LISTS_LIST,
            get: api::FARMER_LIST_GET,
            create: api::FARMER_LIST_CREATE,
            update: api::FARMER_LIST_UPDATE,
            delete: api::FARMER_LIST_DELETE,
        },
        ListKind::ContactList => ListEndpoints {
            list: api::CONTACT_LISTS_LIST,
            get: api::CONTACT_LIST_GET,
            create: api::CONTACT_LIST_CREATE,
            update: api::CONTACT_LIST_UPDATE,
            delete: api::CONTACT_LIST_DELETE,
        },
    }
}

/// Every saved list of one kind
pub async fn fetch_lists(kind: ListKind) -> Result<Vec<BroadcastList>, ApiError> {
    let body = NetworkManager::new(endpoints(kind).list).call().await?;
    Ok(extract_items(&body, BroadcastList::ITEMS_KEYS)
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

/// Full list with members
pub async fn fetch_list(list: &ListRef) -> Result<BroadcastList, ApiError> {
    let body = NetworkManager::new(endpoints(list.kind).get)
        .with_id(&list.id)
        .call()
        .await?;
    BroadcastList::from_body(&body)
        .ok_or_else(|| ApiError::Decode(format!("list {} has an unexpected shape", list.id)))
}

/// Create when `id` is `None`, update otherwise
pub async fn save_list(
    kind: ListKind,
    id: Option<&str>,
    dto: &SaveBroadcastListDto,
) -> Result<(), ApiError> {
    let eps = endpoints(kind);
    let manager = match id {
        Some(id) => NetworkManager::new(eps.update).with_id(id),
        None => NetworkManager::new(eps.create),
    };
    manager.send(dto).await.map(|_| ())
}

pub async fn delete_list(list: &ListRef) -> Result<(), ApiError> {
    NetworkManager::new(endpoints(list.kind).delete)
        .with_id(&list.id)
        .call()
        .await
        .map(|_| ())
}
