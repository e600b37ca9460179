use super::actions::{opt_text, parse_amount};
use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use crate::shared::number_format::format_rupees;
use contracts::domain::a006_agri_sales_order::validation::validate_create;
use contracts::domain::a006_agri_sales_order::CreateOrderDto;
use contracts::shared::phone::normalize_phone;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn AddAgriSalesOrderForm(open: RwSignal<bool>, on_done: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let customer_name = RwSignal::new(String::new());
    let customer_mobile = RwSignal::new(String::new());
    let village = RwSignal::new(String::new());
    let taluka = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let product_name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let rate = RwSignal::new(String::new());
    let advance = RwSignal::new(String::new());
    let delivery_date = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let build = move || {
        let mut dto = CreateOrderDto {
            customer_name: customer_name.get_untracked().trim().to_string(),
            customer_mobile: normalize_phone(&customer_mobile.get_untracked()),
            village: village.get_untracked().trim().to_string(),
            taluka: taluka.get_untracked().trim().to_string(),
            district: district.get_untracked().trim().to_string(),
            product_name: product_name.get_untracked().trim().to_string(),
            quantity: parse_amount(&quantity.get_untracked()),
            rate: parse_amount(&rate.get_untracked()),
            total_amount: 0.0,
            advance_amount: opt_text(advance.get_untracked()).map(|a| parse_amount(&a)),
            delivery_date: opt_text(delivery_date.get_untracked()),
            notes: opt_text(notes.get_untracked()),
        };
        dto.total_amount = dto.computed_total();
        dto
    };

    let total_preview = move || parse_amount(&quantity.get()) * parse_amount(&rate.get());

    let submit = move || {
        let dto = build();
        if let Err(e) = validate_create(&dto) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_order(&dto).await {
                Ok(()) => {
                    toast.success(format!("Order for {} created", dto.customer_name));
                    open.set(false);
                    on_done.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("Could not create the order"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            open=open
            title="New order".to_string()
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
                        {move || if submitting.get() { "Saving..." } else { "Create order" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__row">
                    <Label>"Customer name"</Label>
                    <Input value=customer_name />
                </div>
                <div class="form__row">
                    <Label>"Mobile"</Label>
                    <Input value=customer_mobile input_type=InputType::Tel placeholder="10-digit mobile" />
                </div>
                <div class="form__grid">
                    <div class="form__row">
                        <Label>"Village"</Label>
                        <Input value=village />
                    </div>
                    <div class="form__row">
                        <Label>"Taluka"</Label>
                        <Input value=taluka />
                    </div>
                    <div class="form__row">
                        <Label>"District"</Label>
                        <Input value=district />
                    </div>
                </div>
                <div class="form__row">
                    <Label>"Product"</Label>
                    <Input value=product_name />
                </div>
                <div class="form__grid">
                    <div class="form__row">
                        <Label>"Quantity"</Label>
                        <Input value=quantity input_type=InputType::Number />
                    </div>
                    <div class="form__row">
                        <Label>"Rate"</Label>
                        <Input value=rate input_type=InputType::Number />
                    </div>
                </div>
                <div class="form__hint">{move || format!("Total {}", format_rupees(total_preview()))}</div>
                <div class="form__grid">
                    <div class="form__row">
                        <Label>"Advance"</Label>
                        <Input value=advance input_type=InputType::Number placeholder="Optional" />
                    </div>
                    <div class="form__row">
                        <Label>"Delivery date"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || delivery_date.get()
                            on:change=move |ev| delivery_date.set(event_target_value(&ev))
                        />
                    </div>
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
