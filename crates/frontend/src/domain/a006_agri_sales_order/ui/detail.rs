use super::actions::{CompleteOrderModal, DispatchModal, PaymentModal, RejectOrderModal, SalesReturnModal};
use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_date, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_quantity, format_rupees};
use contracts::domain::a006_agri_sales_order::{AgriSalesOrder, OrderAction};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn info_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{value}</span>
        </div>
    }
}

/// Full order view with payments, activity log and the actions its state allows
#[component]
pub fn OrderDetail(order_id: String, on_back: Callback<()>, on_changed: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let order_id = StoredValue::new(order_id);
    let (order, set_order) = signal::<Option<AgriSalesOrder>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    let action = RwSignal::new(None::<OrderAction>);
    let modal_open = RwSignal::new(false);

    let load = move || {
        let id = order_id.get_value();
        spawn_local(async move {
            match api::fetch_order(&id).await {
                Ok(o) => {
                    set_order.set(Some(o));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.message_or("Could not load the order"))),
            }
        });
    };

    let after_action = Callback::new(move |_| {
        action.set(None);
        load();
        on_changed.run(());
    });

    let accept = move || {
        let id = order_id.get_value();
        set_busy.set(true);
        spawn_local(async move {
            match api::accept_order(&id).await {
                Ok(()) => {
                    toast.success("Order accepted");
                    after_action.run(());
                }
                Err(e) => toast.error(e.message_or("Could not accept the order")),
            }
            set_busy.set(false);
        });
    };

    let run_action = move |a: OrderAction| {
        if a == OrderAction::Accept {
            accept();
        } else {
            action.set(Some(a));
            modal_open.set(true);
        }
    };

    // a closed dialog drops its form
    Effect::new(move |_| {
        if !modal_open.get() {
            action.set(None);
        }
    });

    load();

    view! {
        <div class="order-detail">
            <div class="order-detail__header">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_back.run(())>
                    {icon("chevron-left")}
                    "Back"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| load()>
                    {icon("refresh")}
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || match order.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(o) => {
                    let actions = o.available_actions();
                    let payments = o.payment.clone();
                    let log = o.activity_log.clone();
                    view! {
                        <div class="order-card order-card--detail">
                            <div class="order-card__title">
                                <strong>{o.order_number.clone()}</strong>
                                <StatusBadge label=o.order_status.display_name() class=o.order_status.badge_class() />
                                <span class="muted">{o.dispatch_status.display_name()}</span>
                            </div>
                            {info_row("Customer", o.customer_name.clone())}
                            {info_row("Mobile", o.customer_mobile.clone())}
                            {info_row(
                                "Location",
                                [o.village.as_str(), o.taluka.as_str(), o.district.as_str()]
                                    .iter()
                                    .filter(|s| !s.is_empty())
                                    .cloned()
                                    .collect::<Vec<_>>()
                                    .join(", "),
                            )}
                            {info_row("Product", o.product_name.clone())}
                            {info_row(
                                "Quantity",
                                format!("{} × {}", format_quantity(o.quantity), format_rupees(o.rate)),
                            )}
                            {(o.returned_quantity > 0.0).then(|| info_row("Returned", format_quantity(o.returned_quantity)))}
                            {info_row("Total", format_rupees(o.total_amount))}
                            {info_row("Paid", format_rupees(o.paid_amount.max(o.payments_total())))}
                            {info_row("Outstanding", format_rupees(o.outstanding()))}
                            {info_row("Delivery", format_opt_date(o.delivery_date.as_deref()))}
                            {info_row("Created by", o.created_by_name.clone().unwrap_or_else(|| "-".to_string()))}
                        </div>

                        <div class="order-actions">
                            {actions
                                .into_iter()
                                .map(|a| {
                                    let appearance = if a == OrderAction::Reject {
                                        ButtonAppearance::Secondary
                                    } else {
                                        ButtonAppearance::Primary
                                    };
                                    view! {
                                        <Button
                                            appearance=appearance
                                            on_click=move |_| run_action(a)
                                            disabled=move || busy.get()
                                        >
                                            {a.label()}
                                        </Button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <h3 class="section-title">"Payments"</h3>
                        {if payments.is_empty() {
                            view! { <p class="muted">"No payments recorded"</p> }.into_any()
                        } else {
                            payments
                                .into_iter()
                                .map(|p| {
                                    view! {
                                        <div class="payment-row">
                                            <span>{p.payment_date.as_deref().map(format_date).unwrap_or_default()}</span>
                                            <span>{p.mode_of_payment.clone()}</span>
                                            <strong>{format_rupees(p.amount)}</strong>
                                            <span class="muted">{p.reference_number.clone().unwrap_or_default()}</span>
                                            <span class="muted">{p.payment_status.clone().unwrap_or_default()}</span>
                                            {p.receipt_photos
                                                .iter()
                                                .map(|url| view! {
                                                    <a href=url.clone() target="_blank" class="receipt-link">"Receipt"</a>
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}

                        <h3 class="section-title">"Activity"</h3>
                        <ul class="activity-log">
                            {log.into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="activity-log__item">
                                            <span class="activity-log__time">{format_opt_date(entry.timestamp.as_deref())}</span>
                                            <strong>{entry.action.clone()}</strong>
                                            <span>{entry.description.clone().unwrap_or_default()}</span>
                                            <span class="muted">{entry.performed_by.clone().unwrap_or_default()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}

            {move || {
                let current = order.get_untracked()?;
                let a = action.get()?;
                let view = match a {
                    OrderAction::AddPayment => view! {
                        <PaymentModal open=modal_open order=current on_done=after_action />
                    }
                    .into_any(),
                    OrderAction::Dispatch => view! {
                        <DispatchModal open=modal_open orders=vec![current] on_done=after_action />
                    }
                    .into_any(),
                    OrderAction::Complete => view! {
                        <CompleteOrderModal open=modal_open orders=vec![current] on_done=after_action />
                    }
                    .into_any(),
                    OrderAction::SalesReturn => view! {
                        <SalesReturnModal open=modal_open order=current on_done=after_action />
                    }
                    .into_any(),
                    OrderAction::Reject => view! {
                        <RejectOrderModal open=modal_open order=current on_done=after_action />
                    }
                    .into_any(),
                    OrderAction::Accept => return None,
                };
                Some(view)
            }}
        </div>
    }
}
