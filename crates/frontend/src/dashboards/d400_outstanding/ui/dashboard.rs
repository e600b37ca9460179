use crate::dashboards::d400_outstanding::api;
use crate::shared::components::{SearchInput, StatCard};
use crate::shared::date_utils::{format_date, iso_date, today};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_indian, format_rupees};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_outstanding::{
    AgingBucket, OutstandingRow, OutstandingSort, OutstandingSummary,
};
use contracts::shared::settings::SEARCH_DEBOUNCE_MS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn bucket_tone(bucket: AgingBucket) -> &'static str {
    match bucket {
        AgingBucket::Current => "aging-card--current",
        AgingBucket::Days31To60 => "aging-card--warn",
        AgingBucket::Days61To90 | AgingBucket::Over90 => "aging-card--overdue",
    }
}

/// Outstanding balances per customer with aging, search and sort.
/// Everything after the single fetch happens client-side.
#[component]
pub fn OutstandingDashboard() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<OutstandingRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());
    let sort_code = RwSignal::new(OutstandingSort::default().code().to_string());
    let bucket_filter = RwSignal::new(None::<AgingBucket>);
    let day = today();

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_outstanding().await {
                Ok(list) => {
                    set_rows.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message_or("Could not load outstanding balances"))),
            }
            set_loading.set(false);
        });
    };

    let summary = Memo::new(move |_| rows.with(|r| OutstandingSummary::from_rows(r, day)));

    let visible = Memo::new(move |_| {
        let term = search.get();
        let bucket = bucket_filter.get();
        let mut list: Vec<OutstandingRow> = rows.with(|r| {
            r.iter()
                .filter(|row| row.balance_amount > 0.0)
                .filter(|row| row.matches(&term))
                .filter(|row| bucket.map_or(true, |b| row.bucket(day) == b))
                .cloned()
                .collect()
        });
        OutstandingSort::from_code(&sort_code.get()).apply(&mut list);
        list
    });

    load();

    view! {
        <PageFrame page_id="d400_outstanding--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Outstanding"</h1>
                    <span class="muted">{format!("As of {}", format_date(&iso_date(day)))}</span>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Outstanding"
                    icon_name="wallet"
                    value=Signal::derive(move || format_rupees(summary.get().balance_amount))
                    subtitle=Signal::derive(move || {
                        let s = summary.get();
                        Some(format!("{} customers, {} orders", s.customers, s.orders))
                    })
                    tone="stat-card--warning"
                />
                <StatCard
                    label="Billed"
                    icon_name="orders"
                    value=Signal::derive(move || format_rupees(summary.get().total_amount))
                />
                <StatCard
                    label="Collected"
                    icon_name="wallet"
                    value=Signal::derive(move || format_rupees(summary.get().paid_amount))
                    subtitle=Signal::derive(move || {
                        Some(format!("{}% collected", format_indian(summary.get().collection_rate(), 1)))
                    })
                    tone="stat-card--success"
                />
            </div>

            <div class="aging-grid">
                {AgingBucket::all()
                    .into_iter()
                    .map(|bucket| {
                        view! {
                            <button
                                class=format!("aging-card {}", bucket_tone(bucket))
                                class:aging-card--active=move || bucket_filter.get() == Some(bucket)
                                on:click=move |_| {
                                    bucket_filter.update(|f| {
                                        *f = if *f == Some(bucket) { None } else { Some(bucket) };
                                    })
                                }
                            >
                                <span class="aging-card__label">{bucket.label()}</span>
                                <strong class="aging-card__value">
                                    {move || format_rupees(summary.get().bucket_amount(bucket))}
                                </strong>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="filters">
                <SearchInput value=search delay_ms=SEARCH_DEBOUNCE_MS placeholder="Customer, village or mobile" />
                <Select value=sort_code>
                    {OutstandingSort::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                        .collect_view()}
                </Select>
                {move || bucket_filter.get().map(|b| view! {
                    <button class="chip" on:click=move |_| bucket_filter.set(None)>
                        {format!("{} ×", b.label())}
                    </button>
                })}
            </div>

            <div class="table-wrapper">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Mobile"</th>
                            <th class="table__header-cell">"Village"</th>
                            <th class="table__header-cell table__header-cell--right">"Orders"</th>
                            <th class="table__header-cell table__header-cell--right">"Billed"</th>
                            <th class="table__header-cell table__header-cell--right">"Paid"</th>
                            <th class="table__header-cell table__header-cell--right">"Balance"</th>
                            <th class="table__header-cell">"Oldest order"</th>
                            <th class="table__header-cell">"Age"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = visible.get();
                            if list.is_empty() {
                                let text = if loading.get() { "Loading..." } else { "No outstanding balances" };
                                return view! {
                                    <tr class="table__row">
                                        <td class="table__cell muted" colspan="9">{text}</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            list.into_iter()
                                .map(|row| {
                                    let age = row.age_days(day);
                                    let bucket = row.bucket(day);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.customer_name.clone()}</td>
                                            <td class="table__cell">{row.mobile.clone()}</td>
                                            <td class="table__cell">{row.village.clone()}</td>
                                            <td class="table__cell table__cell--right">{row.orders}</td>
                                            <td class="table__cell table__cell--right">{format_rupees(row.total_amount)}</td>
                                            <td class="table__cell table__cell--right">{format_rupees(row.paid_amount)}</td>
                                            <td class="table__cell table__cell--right">
                                                <strong>{format_rupees(row.balance_amount)}</strong>
                                            </td>
                                            <td class="table__cell">
                                                {row.oldest_order_date.map(|d| format_date(&iso_date(d))).unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class=format!("table__cell {}", bucket_tone(bucket))>
                                                {age.map(|d| format!("{} days", d)).unwrap_or_else(|| "-".to_string())}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
