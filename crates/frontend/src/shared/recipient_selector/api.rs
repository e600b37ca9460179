use crate::domain::a004_broadcast_list::api as list_api;
use crate::shared::network::{api, ApiError, NetworkManager};
use contracts::domain::a001_farmer::parse_farmer_list;
use contracts::domain::a002_public_lead::{PublicLead, PublicLink};
use contracts::domain::a003_sales_customer::SalesCustomer;
use contracts::domain::a004_broadcast_list::ListRef;
use contracts::shared::envelope::{extract_items, ListPage};
use contracts::shared::list_query::{ListQuery, Pagination};
use contracts::shared::recipients::Recipient;
use contracts::shared::source_state::SourceTab;

/// One page of candidates for a source tab
pub async fn fetch_source(
    tab: SourceTab,
    query: &ListQuery,
) -> Result<(Vec<Recipient>, Pagination), ApiError> {
    let (page, limit) = (query.page, query.limit);
    match tab {
        SourceTab::Farmers => {
            let body = NetworkManager::new(api::FARMERS_LIST).fetch(query).await?;
            let list = parse_farmer_list(&body, page, limit);
            Ok((list.items.iter().map(Recipient::from).collect(), list.pagination))
        }
        SourceTab::Sales => {
            let body = NetworkManager::new(api::SALES_CUSTOMERS_LIST)
                .fetch(query)
                .await?;
            let list: ListPage<SalesCustomer> =
                ListPage::from_body(&body, SalesCustomer::ITEMS_KEYS, page, limit);
            Ok((list.items.iter().map(Recipient::from).collect(), list.pagination))
        }
        SourceTab::PublicLeads => {
            let body = NetworkManager::new(api::PUBLIC_LEADS_LIST)
                .fetch(query)
                .await?;
            let list: ListPage<PublicLead> =
                ListPage::from_body(&body, PublicLead::ITEMS_KEYS, page, limit);
            Ok((list.items.iter().map(Recipient::from).collect(), list.pagination))
        }
        SourceTab::Manual => Ok((Vec::new(), Pagination::default())),
    }
}

pub async fn fetch_public_links() -> Result<Vec<PublicLink>, ApiError> {
    let body = NetworkManager::new(api::PUBLIC_LINKS_LIST).call().await?;
    Ok(extract_items(&body, PublicLink::ITEMS_KEYS)
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

/// Members of every chosen list, loaded one after another
pub async fn load_list_members(lists: &[ListRef]) -> Result<Vec<Recipient>, ApiError> {
    let mut members = Vec::new();
    for list in lists {
        let loaded = list_api::fetch_list(list).await?;
        log::debug!(
            "{} {} has {} members",
            list.kind.display_name(),
            list.id,
            loaded.size()
        );
        members.extend(loaded.members());
    }
    Ok(members)
}
