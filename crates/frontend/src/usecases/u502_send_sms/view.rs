use super::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::recipient_selector::RecipientSelector;
use crate::usecases::u501_send_campaign::api::fetch_templates;
use contracts::domain::a007_message_template::MessageTemplate;
use contracts::shared::phone::{parse_manual_phone, to_msisdn};
use contracts::shared::recipients::{Recipient, SelectedRecipients};
use contracts::shared::settings::{FAILURE_PREVIEW_LIMIT, SMS_SEARCH_DEBOUNCE_MS};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_send_campaign::{
    resolve_param_value, CustomParam, SendTemplateMessageRequest,
};
use contracts::usecases::u502_send_sms::{BulkSendSummary, SendSms, SmsRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use std::sync::Arc;
use thaw::*;

const MODE_SMS: &str = "sms";
const MODE_TEMPLATE: &str = "template";

#[component]
pub fn SmsPage() -> impl IntoView {
    let bulk_open = RwSignal::new(false);
    let single_open = RwSignal::new(false);

    view! {
        <PageFrame page_id="u502_send_sms--usecase" category=PAGE_CAT_USECASE>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{SendSms::display_name()}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| bulk_open.set(true)>
                        {icon("users")}
                        "Bulk SMS"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| single_open.set(true)>
                        {icon("message")}
                        "Single number"
                    </Button>
                </div>
            </div>
            <p class="muted">{SendSms::description()}</p>
            <Show when=move || bulk_open.get()>
                <SendSmsModal open=bulk_open />
            </Show>
            <Show when=move || single_open.get()>
                <SingleSendModal open=single_open />
            </Show>
        </PageFrame>
    }
}

/// SMS to every selected recipient, one request per number.
/// Failures are tallied and the run continues.
#[component]
pub fn SendSmsModal(open: RwSignal<bool>) -> impl IntoView {
    let toast = use_toast();
    let selected = RwSignal::new(SelectedRecipients::new());
    let body = RwSignal::new(String::new());
    let sender = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);
    let (progress, set_progress) = signal((0usize, 0usize));
    let (summary, set_summary) = signal::<Option<BulkSendSummary>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let send = move || {
        let text = body.get_untracked().trim().to_string();
        if text.is_empty() {
            set_error.set(Some("Message is required".to_string()));
            return;
        }
        let recipients: Vec<Recipient> = selected.with_untracked(|s| s.as_slice().to_vec());
        if recipients.is_empty() {
            set_error.set(Some("Select at least one recipient".to_string()));
            return;
        }
        let from = sender.get_untracked();
        set_error.set(None);
        set_summary.set(None);
        set_sending.set(true);
        spawn_local(async move {
            let total = recipients.len();
            let mut tally = BulkSendSummary::default();
            for (i, r) in recipients.iter().enumerate() {
                set_progress.try_set((i, total));
                let req = SmsRequest::new(&r.phone, &text).with_sender(&from);
                match api::send_sms(&req).await {
                    Ok(()) => tally.record_success(),
                    Err(e) => {
                        log::warn!("sms to {} failed: {}", req.to, e);
                        tally.record_failure(&r.phone, e.message_or("Failed to send"));
                    }
                }
            }
            log::info!("bulk sms finished: {}", tally.headline());
            if tally.all_succeeded() {
                toast.success(tally.headline());
                set_sending.try_set(false);
                open.try_set(false);
            } else {
                toast.warning(tally.headline());
                set_sending.try_set(false);
                set_summary.try_set(Some(tally));
            }
        });
    };

    view! {
        <Modal
            open=open
            title="Bulk SMS".to_string()
            actions=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Close"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| send()
                        disabled=move || sending.get()
                    >
                        {move || {
                            if sending.get() {
                                let (done, total) = progress.get();
                                format!("Sending {} of {}...", done + 1, total)
                            } else {
                                format!("Send to {}", selected.with(SelectedRecipients::len))
                            }
                        }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__row">
                    <Label>"Message"</Label>
                    <Textarea value=body placeholder="Text of the SMS" />
                    <div class="form__hint">{move || format!("{} characters", body.with(|b| b.chars().count()))}</div>
                </div>
                <div class="form__row">
                    <Label>"Sender ID"</Label>
                    <Input value=sender placeholder="Optional" />
                </div>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                {move || summary.get().map(|s| {
                    let hidden = s.failures.len().saturating_sub(FAILURE_PREVIEW_LIMIT);
                    view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"⚠"</span>
                            <div class="warning-box__text">
                                <strong>{s.headline()}</strong>
                                <ul>
                                    {s.preview(FAILURE_PREVIEW_LIMIT)
                                        .iter()
                                        .map(|f| view! { <li>{format!("{}: {}", f.phone, f.reason)}</li> })
                                        .collect_view()}
                                </ul>
                                {(hidden > 0).then(|| view! { <span class="muted">{format!("and {} more", hidden)}</span> })}
                            </div>
                        </div>
                    }
                })}
                <RecipientSelector selected=selected search_delay_ms=SMS_SEARCH_DEBOUNCE_MS />
            </div>
        </Modal>
    }
}

/// One number, either a plain SMS or a template message
#[component]
pub fn SingleSendModal(open: RwSignal<bool>) -> impl IntoView {
    let toast = use_toast();
    let phone = RwSignal::new(String::new());
    let mode = RwSignal::new(MODE_SMS.to_string());
    let body = RwSignal::new(String::new());
    let sender = RwSignal::new(String::new());
    let templates = RwSignal::new(Vec::<MessageTemplate>::new());
    let template_name = RwSignal::new(String::new());
    let params = RwSignal::new(BTreeMap::<String, String>::new());
    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let templates_requested = StoredValue::new(false);

    // templates are fetched the first time the template mode is picked
    Effect::new(move |_| {
        if mode.get() != MODE_TEMPLATE || templates_requested.get_value() {
            return;
        }
        templates_requested.set_value(true);
        spawn_local(async move {
            match fetch_templates().await {
                Ok(list) => {
                    templates.try_set(list);
                }
                Err(e) => {
                    set_error.try_set(Some(e.message_or("Could not load templates")));
                }
            }
        });
    });

    let current_template = Memo::new(move |_| {
        let name = template_name.get();
        templates.with(|ts| ts.iter().find(|t| t.name == name).cloned())
    });

    let finish = move |ok: bool, message: String| {
        set_sending.try_set(false);
        if ok {
            toast.success(message);
            open.try_set(false);
        } else {
            set_error.try_set(Some(message));
        }
    };

    let send = move || {
        let number = match parse_manual_phone(&phone.get_untracked()) {
            Ok(n) => n,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);

        if mode.get_untracked() == MODE_TEMPLATE {
            let Some(template) = current_template.get_untracked() else {
                set_error.set(Some("Choose a template".to_string()));
                return;
            };
            let recipient = Recipient::manual(&number);
            let values = params.get_untracked();
            let req = SendTemplateMessageRequest {
                template_name: template.name.clone(),
                broadcast_name: template.name.clone(),
                language_code: template.language_code().to_string(),
                channel_number: None,
                phone: to_msisdn(&number),
                parameters: template
                    .variables
                    .iter()
                    .map(|var| CustomParam {
                        name: var.clone(),
                        value: resolve_param_value(
                            var,
                            values.get(var).map(String::as_str).unwrap_or(""),
                            &recipient,
                        ),
                    })
                    .collect(),
            };
            set_sending.set(true);
            spawn_local(async move {
                let result = api::send_template_message(&req).await;
                match result.error {
                    None if result.success => finish(true, format!("Template sent to {}", number)),
                    err => finish(false, err.unwrap_or_else(|| "Failed to send the message".to_string())),
                }
            });
        } else {
            let text = body.get_untracked();
            if text.trim().is_empty() {
                set_error.set(Some("Message is required".to_string()));
                return;
            }
            let req = SmsRequest::new(&number, &text).with_sender(&sender.get_untracked());
            set_sending.set(true);
            spawn_local(async move {
                match api::send_sms(&req).await {
                    Ok(()) => finish(true, format!("SMS sent to {}", number)),
                    Err(e) => finish(false, e.message_or("Failed to send the SMS")),
                }
            });
        }
    };

    view! {
        <Modal
            open=open
            title="Send to one number".to_string()
            actions=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| send()
                        disabled=move || sending.get()
                    >
                        {move || if sending.get() { "Sending..." } else { "Send" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__row">
                    <Label>"Mobile"</Label>
                    <Input value=phone input_type=InputType::Tel placeholder="10-digit mobile" />
                </div>
                <div class="form__row">
                    <Label>"Send as"</Label>
                    <Select value=mode>
                        <option value=MODE_SMS>"SMS"</option>
                        <option value=MODE_TEMPLATE>"WhatsApp template"</option>
                    </Select>
                </div>
                <Show
                    when=move || mode.get() == MODE_TEMPLATE
                    fallback=move || view! {
                        <div class="form__row">
                            <Label>"Message"</Label>
                            <Textarea value=body placeholder="Text of the SMS" />
                        </div>
                        <div class="form__row">
                            <Label>"Sender ID"</Label>
                            <Input value=sender placeholder="Optional" />
                        </div>
                    }
                >
                    <div class="form__row">
                        <Label>"Template"</Label>
                        <Select value=template_name>
                            <option value="">"Choose a template"</option>
                            {move || {
                                templates
                                    .get()
                                    .into_iter()
                                    .map(|t| view! { <option value=t.name.clone()>{t.name.clone()}</option> })
                                    .collect_view()
                            }}
                        </Select>
                    </div>
                    {move || {
                        current_template
                            .get()
                            .map(|t| t.variables)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|var| {
                                let for_value = var.clone();
                                let for_input = var.clone();
                                view! {
                                    <div class="form__row">
                                        <Label>{var}</Label>
                                        <input
                                            type="text"
                                            class="form__input"
                                            prop:value=move || {
                                                params.with(|p| p.get(&for_value).cloned().unwrap_or_default())
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                params.update(|p| {
                                                    p.insert(for_input.clone(), value);
                                                });
                                            }
                                        />
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                    {move || current_template.get().map(|t| view! {
                        <div class="message-preview">
                            <pre class="message-preview__body">{params.with(|p| t.preview(p))}</pre>
                        </div>
                    })}
                </Show>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
            </div>
        </Modal>
    }
}
