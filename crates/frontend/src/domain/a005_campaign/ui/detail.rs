use crate::domain::a005_campaign::api;
use crate::shared::components::{Modal, StatusBadge};
use crate::shared::date_utils::{clock_time, format_datetime, format_opt_date};
use contracts::domain::a005_campaign::Campaign;
use contracts::shared::phone::mask_phone;
use contracts::shared::settings::CAMPAIGN_POLL_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thaw::*;

fn count_card(label: &'static str, value: usize, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class)>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}

/// Delivery report of one campaign. Refreshes silently every
/// `CAMPAIGN_POLL_MS` until the dialog closes or the view unmounts.
#[component]
pub fn CampaignDetail(open: RwSignal<bool>, id: String) -> impl IntoView {
    let (campaign, set_campaign) = signal::<Option<Campaign>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (refreshed_at, set_refreshed_at) = signal(String::new());
    let alive = Arc::new(AtomicBool::new(true));

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let polling = move || alive.load(Ordering::Relaxed) && open.try_get_untracked() == Some(true);

    spawn_local(async move {
        let mut first = true;
        while polling() {
            match api::fetch_campaign(&id).await {
                Ok(c) if polling() => {
                    set_campaign.set(Some(c));
                    set_error.set(None);
                    set_refreshed_at.set(clock_time());
                }
                Ok(_) => break,
                Err(e) if first => {
                    if polling() {
                        set_error.set(Some(e.message_or("Could not load the campaign")));
                    }
                }
                Err(e) => log::warn!("campaign {} refresh failed: {}", id, e),
            }
            first = false;
            TimeoutFuture::new(CAMPAIGN_POLL_MS).await;
        }
        log::debug!("stopped polling campaign {}", id);
    });

    let title = Signal::derive(move || {
        campaign
            .get()
            .map(|c| c.name)
            .unwrap_or_else(|| "Campaign".to_string())
    });

    view! {
        <Modal
            open=open
            title=title
            actions=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Close"
                    </Button>
                }
                .into_any()
            })
        >
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || match campaign.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(c) => {
                    let counts = c.counts();
                    let finished = c.is_finished();
                    view! {
                        <div class="campaign-detail">
                            <div class="campaign-detail__meta">
                                <span>{format!("Template: {}", c.template_name)}</span>
                                <span>{format!("Created: {}", format_opt_date(c.created_at.as_deref()))}</span>
                                <span class="muted">
                                    {move || format!("Updated {}", refreshed_at.get())}
                                </span>
                                {finished.then(|| view! {
                                    <StatusBadge label="All messages settled" class="badge--success" />
                                })}
                            </div>
                            <div class="stat-cards">
                                {count_card("Contacts", c.contacts.len(), "stat-card--neutral")}
                                {count_card("Sent", counts.sent, "stat-card--primary")}
                                {count_card("Delivered", counts.delivered, "stat-card--success")}
                                {count_card("Read", counts.read, "stat-card--success")}
                                {count_card("Failed", counts.failed, "stat-card--error")}
                            </div>
                            <div class="table">
                                <table class="table__data table--striped">
                                    <thead class="table__head">
                                        <tr>
                                            <th class="table__header-cell">"Name"</th>
                                            <th class="table__header-cell">"Mobile"</th>
                                            <th class="table__header-cell">"Status"</th>
                                            <th class="table__header-cell">"Updated"</th>
                                            <th class="table__header-cell">"Error"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {c.contacts
                                            .into_iter()
                                            .map(|contact| {
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">{contact.name.unwrap_or_default()}</td>
                                                        <td class="table__cell">{mask_phone(&contact.phone)}</td>
                                                        <td class="table__cell">
                                                            <StatusBadge
                                                                label=contact.status.display_name()
                                                                class=contact.status.badge_class()
                                                            />
                                                        </td>
                                                        <td class="table__cell">
                                                            {contact.updated_at.as_deref().map(format_datetime).unwrap_or_default()}
                                                        </td>
                                                        <td class="table__cell">{contact.error.unwrap_or_default()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </Modal>
    }
}
