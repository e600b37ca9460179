use super::opt_text;
use crate::domain::a006_agri_sales_order::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use contracts::domain::a006_agri_sales_order::validation::validate_dispatch;
use contracts::domain::a006_agri_sales_order::{AgriSalesOrder, DispatchMode, DispatchRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

const MODE_VEHICLE: &str = "VEHICLE";
const MODE_COURIER: &str = "COURIER";

/// Dispatch one or more accepted orders together
#[component]
pub fn DispatchModal(
    open: RwSignal<bool>,
    orders: Vec<AgriSalesOrder>,
    on_done: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let order_ids = StoredValue::new(orders.iter().map(|o| o.id.clone()).collect::<Vec<_>>());
    let summary = orders
        .iter()
        .map(|o| o.order_number.clone())
        .collect::<Vec<_>>()
        .join(", ");

    let mode = RwSignal::new(MODE_VEHICLE.to_string());
    let vehicle_number = RwSignal::new(String::new());
    let driver_name = RwSignal::new(String::new());
    let driver_mobile = RwSignal::new(String::new());
    let courier_name = RwSignal::new(String::new());
    let tracking_id = RwSignal::new(String::new());
    let courier_contact = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let is_vehicle = move || mode.get() != MODE_COURIER;

    let submit = move || {
        let dispatch_mode = if mode.get_untracked() == MODE_COURIER {
            DispatchMode::Courier
        } else {
            DispatchMode::Vehicle
        };
        let mut req = DispatchRequest::new(order_ids.get_value(), dispatch_mode);
        req.vehicle_number = opt_text(vehicle_number.get_untracked());
        req.driver_name = opt_text(driver_name.get_untracked());
        req.driver_mobile = opt_text(driver_mobile.get_untracked());
        req.courier_name = opt_text(courier_name.get_untracked());
        req.courier_tracking_id = opt_text(tracking_id.get_untracked());
        req.courier_contact = opt_text(courier_contact.get_untracked());
        req.dispatch_notes = opt_text(notes.get_untracked());
        let req = req.scrubbed();

        if let Err(e) = validate_dispatch(&req) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::dispatch_orders(&req).await {
                Ok(()) => {
                    toast.success(format!("{} order(s) dispatched", req.order_ids.len()));
                    open.set(false);
                    on_done.run(());
                }
                Err(e) => set_error.set(Some(e.message_or("Could not dispatch the orders"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            open=open
            title="Dispatch orders".to_string()
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
                        {move || if submitting.get() { "Dispatching..." } else { "Dispatch" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__hint">{summary}</div>
                <div class="form__row">
                    <Label>"Dispatch mode"</Label>
                    <Select value=mode>
                        <option value=MODE_VEHICLE>{DispatchMode::Vehicle.display_name()}</option>
                        <option value=MODE_COURIER>{DispatchMode::Courier.display_name()}</option>
                    </Select>
                </div>
                <Show
                    when=is_vehicle
                    fallback=move || {
                        view! {
                            <div class="form__row">
                                <Label>"Courier name"</Label>
                                <Input value=courier_name />
                            </div>
                            <div class="form__row">
                                <Label>"Tracking id"</Label>
                                <Input value=tracking_id />
                            </div>
                            <div class="form__row">
                                <Label>"Courier contact"</Label>
                                <Input value=courier_contact input_type=InputType::Tel placeholder="Optional" />
                            </div>
                        }
                    }
                >
                    <div class="form__row">
                        <Label>"Vehicle number"</Label>
                        <Input value=vehicle_number placeholder="MH 11 AB 1234" />
                    </div>
                    <div class="form__row">
                        <Label>"Driver name"</Label>
                        <Input value=driver_name />
                    </div>
                    <div class="form__row">
                        <Label>"Driver mobile"</Label>
                        <Input value=driver_mobile input_type=InputType::Tel />
                    </div>
                </Show>
                <div class="form__row">
                    <Label>"Notes"</Label>
                    <Textarea value=notes placeholder="Optional" />
                </div>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
            </div>
        </Modal>
    }
}
