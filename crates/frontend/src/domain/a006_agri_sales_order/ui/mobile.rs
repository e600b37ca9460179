use super::actions::{CompleteOrderModal, DispatchModal};
use super::{AddAgriSalesOrderForm, OrderDetail};
use crate::domain::a006_agri_sales_order::api;
use crate::shared::components::{PaginationControls, SearchInput, StatusBadge};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_quantity, format_rupees};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a006_agri_sales_order::{AgriSalesOrder, OrderAction, OrderTab};
use contracts::shared::list_query::Pagination;
use contracts::shared::settings::SEARCH_DEBOUNCE_MS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

/// Bulk action offered by a tab over its checked orders
fn bulk_action(tab: OrderTab) -> Option<OrderAction> {
    match tab {
        OrderTab::Accepted => Some(OrderAction::Dispatch),
        OrderTab::Dispatched => Some(OrderAction::Complete),
        _ => None,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AgriSalesOrderMobile() -> impl IntoView {
    let tab = RwSignal::new(OrderTab::Pending);
    let search = RwSignal::new(String::new());
    let (page, set_page) = signal(1usize);
    let (items, set_items) = signal::<Vec<AgriSalesOrder>>(Vec::new());
    let (pagination, set_pagination) = signal(Pagination::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let checked = RwSignal::new(HashSet::<String>::new());
    let detail_id = RwSignal::new(None::<String>);
    let add_open = RwSignal::new(false);
    let bulk_open = RwSignal::new(false);
    let generation = StoredValue::new(0u64);

    let fetch = move || {
        let issued = generation.get_value() + 1;
        generation.set_value(issued);
        let current_tab = tab.get_untracked();
        let term = search.get_untracked();
        let page_no = page.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_orders(current_tab, page_no, &term).await;
            if generation.try_get_value() != Some(issued) {
                log::debug!("dropped stale {} orders (generation {})", current_tab.label(), issued);
                return;
            }
            match result {
                Ok(list) => {
                    set_items.set(list.items);
                    set_pagination.set(list.pagination);
                    set_error.set(None);
                }
                Err(e) => {
                    set_items.set(Vec::new());
                    set_pagination.set(Pagination::default());
                    set_error.set(Some(e.message_or("Could not load orders")));
                }
            }
            set_loading.set(false);
        });
    };

    let switch_tab = move |next: OrderTab| {
        if tab.get_untracked() == next {
            return;
        }
        tab.set(next);
        set_page.set(1);
        checked.set(HashSet::new());
        fetch();
    };

    Effect::new(move |prev: Option<String>| {
        let term = search.get();
        if prev.is_some() {
            set_page.set(1);
            fetch();
        }
        term
    });

    let on_changed = Callback::new(move |_| {
        checked.set(HashSet::new());
        fetch();
    });

    let checked_orders = move || {
        let ids = checked.get_untracked();
        items
            .get_untracked()
            .into_iter()
            .filter(|o| ids.contains(&o.id))
            .collect::<Vec<_>>()
    };

    fetch();

    view! {
        <PageFrame page_id="a006_agri_sales_order--list" category=PAGE_CAT_LIST class="page--mobile">
            <Show
                when=move || detail_id.get().is_none()
                fallback=move || {
                    let id = detail_id.get_untracked().unwrap_or_default();
                    view! {
                        <OrderDetail
                            order_id=id
                            on_back=Callback::new(move |_| detail_id.set(None))
                            on_changed=on_changed
                        />
                    }
                }
            >
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">"Orders"</h1>
                    </div>
                    <div class="header__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| add_open.set(true)>
                            {icon("plus")}
                            "New order"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| fetch()
                            disabled=move || loading.get()
                        >
                            {icon("refresh")}
                        </Button>
                    </div>
                </div>

                <div class="tab-buttons tab-buttons--scroll">
                    {OrderTab::all()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tab-button"
                                    class:tab-button--active=move || tab.get() == t
                                    on:click=move |_| switch_tab(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="filters">
                    <SearchInput value=search delay_ms=SEARCH_DEBOUNCE_MS placeholder="Order number, customer or mobile" />
                </div>

                {move || {
                    let action = bulk_action(tab.get())?;
                    let count = checked.with(HashSet::len);
                    Some(view! {
                        <div class="bulk-bar">
                            <span>{format!("{} selected", count)}</span>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| bulk_open.set(true)
                                disabled=count == 0
                            >
                                {format!("{} selected", action.label())}
                            </Button>
                        </div>
                    })
                }}

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="order-list">
                    {move || {
                        let orders = items.get();
                        if orders.is_empty() {
                            return if loading.get() {
                                view! { <Spinner /> }.into_any()
                            } else {
                                view! { <p class="muted">"No orders in this tab"</p> }.into_any()
                            };
                        }
                        let selectable = bulk_action(tab.get_untracked()).is_some();
                        orders
                            .into_iter()
                            .map(|o| {
                                let id_for_open = o.id.clone();
                                let id_for_check = o.id.clone();
                                let id_for_toggle = o.id.clone();
                                view! {
                                    <div class="order-card" on:click=move |_| detail_id.set(Some(id_for_open.clone()))>
                                        <div class="order-card__title">
                                            {selectable.then(|| {
                                                let id_for_check = id_for_check.clone();
                                                let id_for_toggle = id_for_toggle.clone();
                                                view! {
                                                    <input
                                                        type="checkbox"
                                                        class="table__checkbox"
                                                        on:click=|e| e.stop_propagation()
                                                        prop:checked=move || checked.with(|c| c.contains(&id_for_check))
                                                        on:change=move |ev| {
                                                            let on = event_target_checked(&ev);
                                                            checked.update(|c| {
                                                                if on {
                                                                    c.insert(id_for_toggle.clone());
                                                                } else {
                                                                    c.remove(&id_for_toggle);
                                                                }
                                                            });
                                                        }
                                                    />
                                                }
                                            })}
                                            <strong>{o.order_number.clone()}</strong>
                                            <StatusBadge label=o.order_status.display_name() class=o.order_status.badge_class() />
                                        </div>
                                        <div class="order-card__line">{o.customer_name.clone()}</div>
                                        <div class="order-card__line muted">
                                            {format!("{} · {}", o.product_name, format_quantity(o.quantity))}
                                        </div>
                                        <div class="order-card__amounts">
                                            <span>{format_rupees(o.total_amount)}</span>
                                            <span class="order-card__balance">
                                                {format!("Due {}", format_rupees(o.outstanding()))}
                                            </span>
                                        </div>
                                        <div class="order-card__line muted">{format_opt_date(o.created_at.as_deref())}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>

                <PaginationControls
                    current_page=page
                    total_pages=Signal::derive(move || pagination.get().total_pages)
                    total_count=Signal::derive(move || pagination.get().total)
                    on_page_change=Callback::new(move |p| {
                        set_page.set(p);
                        fetch();
                    })
                    disabled=loading
                />
            </Show>

            <Show when=move || add_open.get()>
                <AddAgriSalesOrderForm open=add_open on_done=on_changed />
            </Show>

            {move || {
                if !bulk_open.get() {
                    return None;
                }
                let orders = checked_orders();
                let view = match bulk_action(tab.get_untracked())? {
                    OrderAction::Dispatch => view! {
                        <DispatchModal open=bulk_open orders=orders on_done=on_changed />
                    }
                    .into_any(),
                    _ => view! {
                        <CompleteOrderModal open=bulk_open orders=orders on_done=on_changed />
                    }
                    .into_any(),
                };
                Some(view)
            }}
        </PageFrame>
    }
}
