use super::{opt_text, parse_amount};
use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use crate::shared::number_format::format_quantity;
use contracts::domain::a006_agri_sales_order::validation::validate_complete;
use contracts::domain::a006_agri_sales_order::{AgriSalesOrder, CompleteOrderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use std::sync::Arc;
use thaw::*;

/// Complete dispatched orders. Quantities entered here go back to stock.
#[component]
pub fn CompleteOrderModal(
    open: RwSignal<bool>,
    orders: Vec<AgriSalesOrder>,
    on_done: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let orders = StoredValue::new(orders);
    let returns = RwSignal::new(BTreeMap::<String, String>::new());
    let reason = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move || {
        let order_ids: Vec<String> = orders.with_value(|o| o.iter().map(|o| o.id.clone()).collect());
        let return_quantities: BTreeMap<String, f64> = returns.with_untracked(|r| {
            r.iter()
                .map(|(id, qty)| (id.clone(), parse_amount(qty)))
                .filter(|(_, qty)| *qty != 0.0)
                .collect()
        });
        let req = CompleteOrderRequest {
            order_ids,
            return_quantities,
            return_reason: opt_text(reason.get_untracked()),
            return_notes: opt_text(notes.get_untracked()),
        };
        if let Err(e) = orders.with_value(|o| validate_complete(&req, o)) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::complete_orders(&req).await {
                Ok(()) => {
                    toast.success(format!("{} order(s) completed", req.order_ids.len()));
                    open.set(false);
                    on_done.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("Could not complete the orders"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            open=open
            title="Complete orders".to_string()
            actions=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Saving..." } else { "Complete" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__hint">"Enter a quantity only for goods coming back to stock."</div>
                <div class="table">
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Order"</th>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell table__header-cell--number">"Quantity"</th>
                                <th class="table__header-cell">"Returned"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {orders.with_value(|list| {
                                list.iter()
                                    .map(|o| {
                                        let id = o.id.clone();
                                        let id_for_value = id.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{o.order_number.clone()}</td>
                                                <td class="table__cell">{o.product_name.clone()}</td>
                                                <td class="table__cell table__cell--number">{format_quantity(o.quantity)}</td>
                                                <td class="table__cell">
                                                    <input
                                                        type="number"
                                                        min="0"
                                                        class="form__input form__input--small"
                                                        placeholder="0"
                                                        prop:value=move || {
                                                            returns.with(|r| r.get(&id_for_value).cloned().unwrap_or_default())
                                                        }
                                                        on:input=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            returns.update(|r| {
                                                                r.insert(id.clone(), value);
                                                            });
                                                        }
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })}
                        </tbody>
                    </table>
                </div>
                <div class="form__row">
                    <Label>"Return reason"</Label>
                    <Input value=reason placeholder="Required when anything is returned" />
                </div>
                <div class="form__row">
                    <Label>"Notes"</Label>
                    <Textarea value=notes placeholder="Optional" />
                </div>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
            </div>
        </Modal>
    }
}
