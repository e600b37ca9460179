//! Tab key to view. Every tab key of the console is listed here.

use crate::dashboards::d400_outstanding::OutstandingDashboard;
use crate::domain::a004_broadcast_list::ui::BroadcastListPage;
use crate::domain::a005_campaign::ui::CampaignList;
use crate::domain::a006_agri_sales_order::ui::AgriSalesOrderMobile;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_send_campaign::SendCampaignPage;
use crate::usecases::u502_send_sms::SmsPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ── Aggregates ────────────────────────────────────────────────────
        "a004_broadcast_list" => view! { <BroadcastListPage /> }.into_any(),
        "a005_campaign" => view! { <CampaignList /> }.into_any(),
        "a006_agri_sales_order" => view! { <AgriSalesOrderMobile /> }.into_any(),

        // ── Use cases ─────────────────────────────────────────────────────
        "u501_send_campaign" => view! { <SendCampaignPage /> }.into_any(),
        "u502_send_sms" => view! { <SmsPage /> }.into_any(),

        // ── Dashboards ────────────────────────────────────────────────────
        "d400_outstanding" => view! { <OutstandingDashboard /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            let message = format!("Nothing is registered for '{}'", key);
            view! {
                <div class="placeholder">
                    <p>{message}</p>
                    <button
                        class="button button--secondary"
                        on:click=move |_| tabs_store.close_tab(&key_for_close)
                    >
                        "Close"
                    </button>
                </div>
            }
                .into_any()
        }
    }
}
