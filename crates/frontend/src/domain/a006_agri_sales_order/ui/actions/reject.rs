use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use contracts::domain::a006_agri_sales_order::{AgriSalesOrder, RejectOrderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn RejectOrderModal(open: RwSignal<bool>, order: AgriSalesOrder, on_done: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let order_id = StoredValue::new(order.id.clone());
    let reason = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move || {
        let reason = reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            set_error.set(Some("Reason is required".to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let id = order_id.get_value();
        spawn_local(async move {
            match api::reject_order(&id, &RejectOrderRequest { reason }).await {
                Ok(()) => {
                    toast.success("Order rejected");
                    open.set(false);
                    on_done.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("Could not reject the order"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            open=open
            title=format!("Reject {}", order.order_number)
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
                        "Reject"
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__row">
                    <Label>"Reason"</Label>
                    <Textarea value=reason placeholder="Why is this order rejected?" />
                </div>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
            </div>
        </Modal>
    }
}
