use super::{opt_text, parse_amount};
use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use crate::shared::number_format::format_quantity;
use contracts::domain::a006_agri_sales_order::validation::validate_sales_return;
use contracts::domain::a006_agri_sales_order::{
    AdjustmentType, AgriSalesOrder, PaymentAdjustment, SalesReturnRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct AdjustmentDraft {
    amount: String,
    kind: String,
    reason: String,
    notes: String,
}

impl AdjustmentDraft {
    fn to_adjustment(&self) -> PaymentAdjustment {
        PaymentAdjustment {
            amount: parse_amount(&self.amount),
            adjustment_type: AdjustmentType::from_code(&self.kind).unwrap_or(AdjustmentType::Refund),
            reason: self.reason.trim().to_string(),
            notes: opt_text(self.notes.clone()),
        }
    }
}

/// Sales return against a dispatched or completed order. Stock is not
/// touched; payments may be adjusted alongside.
#[component]
pub fn SalesReturnModal(open: RwSignal<bool>, order: AgriSalesOrder, on_done: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let returnable = order.returnable_quantity();
    let title = format!("Sales return for {}", order.order_number);
    let order = StoredValue::new(order);

    let quantity = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let adjustments = RwSignal::new(Vec::<AdjustmentDraft>::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let edit_adjustment = move |index: usize, apply: fn(&mut AdjustmentDraft, String), value: String| {
        adjustments.update(|list| {
            if let Some(draft) = list.get_mut(index) {
                apply(draft, value);
            }
        });
    };

    let submit = move || {
        let drafts = adjustments.get_untracked();
        let req = SalesReturnRequest {
            return_quantity: parse_amount(&quantity.get_untracked()),
            return_reason: opt_text(reason.get_untracked()),
            return_notes: opt_text(notes.get_untracked()),
            payment_adjustments: if drafts.is_empty() {
                None
            } else {
                Some(drafts.iter().map(AdjustmentDraft::to_adjustment).collect())
            },
        };
        if let Err(e) = order.with_value(|o| validate_sales_return(&req, o)) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let id = order.with_value(|o| o.id.clone());
        spawn_local(async move {
            match api::sales_return(&id, &req).await {
                Ok(()) => {
                    toast.success("Sales return recorded");
                    open.set(false);
                    on_done.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("Could not record the sales return"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            open=open
            title=title
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
                        {move || if submitting.get() { "Saving..." } else { "Record return" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__hint">
                    {format!("Up to {} can be returned. Stock is not changed.", format_quantity(returnable))}
                </div>
                <div class="form__row">
                    <Label>"Return quantity"</Label>
                    <Input value=quantity input_type=InputType::Number />
                </div>
                <div class="form__row">
                    <Label>"Reason"</Label>
                    <Input value=reason placeholder="Optional" />
                </div>
                <div class="form__row">
                    <Label>"Notes"</Label>
                    <Textarea value=notes placeholder="Optional" />
                </div>

                <div class="form__section">
                    <div class="form__section-header">
                        <span>"Payment adjustments"</span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| adjustments.update(|list| {
                                list.push(AdjustmentDraft {
                                    kind: AdjustmentType::Refund.code().to_string(),
                                    ..Default::default()
                                })
                            })
                        >
                            "+ Add adjustment"
                        </Button>
                    </div>
                    {move || {
                        adjustments
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, draft)| {
                                view! {
                                    <div class="adjustment-row">
                                        <input
                                            type="number"
                                            class="form__input form__input--small"
                                            placeholder="Amount"
                                            prop:value=draft.amount.clone()
                                            on:change=move |ev| {
                                                edit_adjustment(i, |d, v| d.amount = v, event_target_value(&ev))
                                            }
                                        />
                                        <select
                                            class="filter-select"
                                            prop:value=draft.kind.clone()
                                            on:change=move |ev| {
                                                edit_adjustment(i, |d, v| d.kind = v, event_target_value(&ev))
                                            }
                                        >
                                            {AdjustmentType::all()
                                                .into_iter()
                                                .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                                                .collect_view()}
                                        </select>
                                        <input
                                            type="text"
                                            class="form__input"
                                            placeholder="Reason"
                                            prop:value=draft.reason.clone()
                                            on:change=move |ev| {
                                                edit_adjustment(i, |d, v| d.reason = v, event_target_value(&ev))
                                            }
                                        />
                                        <input
                                            type="text"
                                            class="form__input"
                                            placeholder="Notes"
                                            prop:value=draft.notes.clone()
                                            on:change=move |ev| {
                                                edit_adjustment(i, |d, v| d.notes = v, event_target_value(&ev))
                                            }
                                        />
                                        <button
                                            class="chip__remove"
                                            on:click=move |_| adjustments.update(|list| {
                                                if i < list.len() {
                                                    list.remove(i);
                                                }
                                            })
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
            </div>
        </Modal>
    }
}
