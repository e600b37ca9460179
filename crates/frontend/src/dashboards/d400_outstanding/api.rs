use crate::shared::network::{api, ApiError, NetworkManager};
use contracts::dashboards::d400_outstanding::OutstandingRow;
use contracts::shared::envelope::extract_items;

const ROW_KEYS: &[&str] = &["customers", "rows", "outstanding", "items"];

/// Per-customer balances. Rows that fail to decode are logged and skipped.
pub async fn fetch_outstanding() -> Result<Vec<OutstandingRow>, ApiError> {
    let body = NetworkManager::new(api::AGRI_OUTSTANDING).call().await?;
    let rows = extract_items(&body, ROW_KEYS)
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<OutstandingRow>(v) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("skipping outstanding row: {}", e);
                None
            }
        })
        .collect::<Vec<_>>();
    log::debug!("loaded {} outstanding rows", rows.len());
    Ok(rows)
}
