use crate::shared::network::{api, ApiError, NetworkManager};
use contracts::domain::a006_agri_sales_order::{
    AgriSalesOrder, CompleteOrderRequest, CreateOrderDto, DispatchRequest, OrderTab,
    PaymentRequest, RejectOrderRequest, SalesReturnRequest,
};
use contracts::shared::envelope::{extract_record, ListPage};
use contracts::shared::list_query::ListQuery;

const ORDER_KEYS: &[&str] = &["order", "agriSalesOrder"];

/// Orders of one tab, filtered by its statuses
pub async fn fetch_orders(
    tab: OrderTab,
    page: usize,
    search: &str,
) -> Result<ListPage<AgriSalesOrder>, ApiError> {
    let query = ListQuery::page(page)
        .search(search)
        .param("orderStatus", &tab.status_filter());
    let body = NetworkManager::new(api::AGRI_ORDERS_LIST).fetch(&query).await?;
    Ok(ListPage::from_body(
        &body,
        AgriSalesOrder::ITEMS_KEYS,
        query.page,
        query.limit,
    ))
}

pub async fn fetch_order(id: &str) -> Result<AgriSalesOrder, ApiError> {
    let body = NetworkManager::new(api::AGRI_ORDER_GET).with_id(id).call().await?;
    extract_record(&body, ORDER_KEYS)
        .ok_or_else(|| ApiError::Decode(format!("order {} has an unexpected shape", id)))
}

pub async fn create_order(dto: &CreateOrderDto) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDER_CREATE)
        .send(dto)
        .await
        .map(|_| ())
}

pub async fn accept_order(id: &str) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDER_ACCEPT)
        .with_id(id)
        .call()
        .await
        .map(|_| ())
}

pub async fn reject_order(id: &str, req: &RejectOrderRequest) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDER_REJECT)
        .with_id(id)
        .send(req)
        .await
        .map(|_| ())
}

pub async fn add_payment(id: &str, req: &PaymentRequest) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDER_ADD_PAYMENT)
        .with_id(id)
        .send(req)
        .await
        .map(|_| ())
}

pub async fn dispatch_orders(req: &DispatchRequest) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDERS_DISPATCH)
        .send(req)
        .await
        .map(|_| ())
}

pub async fn complete_orders(req: &CompleteOrderRequest) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDERS_COMPLETE)
        .send(req)
        .await
        .map(|_| ())
}

pub async fn sales_return(id: &str, req: &SalesReturnRequest) -> Result<(), ApiError> {
    NetworkManager::new(api::AGRI_ORDER_SALES_RETURN)
        .with_id(id)
        .send(req)
        .await
        .map(|_| ())
}
