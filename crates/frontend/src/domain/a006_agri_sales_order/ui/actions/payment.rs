use super::{opt_text, parse_amount};
use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use crate::shared::date_utils::{iso_date, today};
use crate::shared::network::upload_image;
use crate::shared::number_format::format_rupees;
use contracts::domain::a006_agri_sales_order::validation::{payment_can_submit, validate_payment};
use contracts::domain::a006_agri_sales_order::{AgriSalesOrder, PaymentMode, PaymentRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;
use web_sys::HtmlInputElement;

/// Record a payment against one order. Receipt photos are uploaded first
/// and referenced by URL.
#[component]
pub fn PaymentModal(open: RwSignal<bool>, order: AgriSalesOrder, on_done: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let balance = order.outstanding();
    let order_id = StoredValue::new(order.id.clone());

    let amount = RwSignal::new(if balance > 0.0 {
        format!("{:.2}", balance)
    } else {
        String::new()
    });
    let mode = RwSignal::new(String::new());
    let payment_date = RwSignal::new(iso_date(today()));
    let reference = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let photos = RwSignal::new(Vec::<String>::new());
    let (uploading, set_uploading) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let selected_mode = move || PaymentMode::from_code(&mode.get());
    let can_submit = move || {
        payment_can_submit(selected_mode(), parse_amount(&amount.get()), photos.with(Vec::len))
            && !uploading.get()
            && !submitting.get()
    };

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(files) = input.files() else {
            return;
        };
        let picked: Vec<_> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        input.set_value("");
        if picked.is_empty() {
            return;
        }
        set_uploading.set(true);
        spawn_local(async move {
            for file in picked {
                match upload_image(&file).await {
                    Ok(url) => photos.update(|p| p.push(url)),
                    Err(e) => {
                        log::warn!("receipt upload failed: {}", e);
                        toast.error(e.message_or("Could not upload the receipt photo"));
                    }
                }
            }
            set_uploading.set(false);
        });
    };

    let submit = move || {
        let Some(mode_of_payment) = PaymentMode::from_code(&mode.get_untracked()) else {
            set_error.set(Some("Select a mode of payment".to_string()));
            return;
        };
        let req = PaymentRequest {
            amount: parse_amount(&amount.get_untracked()),
            mode_of_payment,
            payment_date: payment_date.get_untracked(),
            reference_number: opt_text(reference.get_untracked()),
            receipt_photos: photos.get_untracked(),
            notes: opt_text(notes.get_untracked()),
        };
        if let Err(e) = validate_payment(&req, balance) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        let id = order_id.get_value();
        spawn_local(async move {
            match api::add_payment(&id, &req).await {
                Ok(()) => {
                    toast.success(format!("Payment of {} recorded", format_rupees(req.amount)));
                    open.set(false);
                    on_done.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("Could not record the payment"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            open=open
            title=format!("Payment for {}", order.order_number)
            actions=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=move || !can_submit()
                    >
                        {move || if submitting.get() { "Saving..." } else { "Record payment" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__hint">
                    {format!(
                        "Total {} · Outstanding {}",
                        format_rupees(order.total_amount),
                        format_rupees(balance),
                    )}
                </div>
                <div class="form__row">
                    <Label>"Amount"</Label>
                    <Input value=amount input_type=InputType::Number />
                </div>
                <div class="form__row">
                    <Label>"Mode of payment"</Label>
                    <Select value=mode>
                        <option value="">"Select mode"</option>
                        {PaymentMode::all()
                            .into_iter()
                            .map(|m| view! { <option value=m.code()>{m.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form__row">
                    <Label>"Payment date"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || payment_date.get()
                        on:change=move |ev| payment_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <Label>"Reference number"</Label>
                    <Input value=reference placeholder="UTR / cheque number" />
                </div>
                <div class="form__row">
                    <Label>
                        {move || {
                            if selected_mode().is_some_and(|m| m.requires_receipt()) {
                                "Receipt photos (required)"
                            } else {
                                "Receipt photos"
                            }
                        }}
                    </Label>
                    <input
                        type="file"
                        accept="image/*"
                        multiple=true
                        prop:disabled=move || uploading.get()
                        on:change=on_files
                    />
                    <Show when=move || uploading.get()>
                        <Spinner />
                    </Show>
                    <div class="receipt-thumbs">
                        {move || {
                            photos
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, url)| {
                                    view! {
                                        <span class="receipt-thumb">
                                            <img src=url alt="receipt" />
                                            <button
                                                class="chip__remove"
                                                on:click=move |_| photos.update(|p| {
                                                    if i < p.len() {
                                                        p.remove(i);
                                                    }
                                                })
                                            >
                                                "×"
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
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
