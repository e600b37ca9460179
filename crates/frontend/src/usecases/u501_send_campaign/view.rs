use super::api;
use crate::layout::toast_service::use_toast;
use crate::shared::browser::confirm;
use crate::shared::components::Modal;
use crate::shared::date_utils::now_utc;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::recipient_selector::RecipientSelector;
use contracts::domain::a007_message_template::MessageTemplate;
use contracts::shared::recipients::{Recipient, SelectedRecipients};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_send_campaign::params::preview;
use contracts::usecases::u501_send_campaign::{
    build_contacts, empty_param_names, history_entries, PlaceholderToken, SendCampaign,
    SendTemplateMessagesRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn SendCampaignPage() -> impl IntoView {
    let open = RwSignal::new(false);
    let (last_sent, set_last_sent) = signal::<Option<String>>(None);

    let on_sent = Callback::new(move |name: String| set_last_sent.set(Some(name)));

    view! {
        <PageFrame page_id="u501_send_campaign--usecase" category=PAGE_CAT_USECASE>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{SendCampaign::display_name()}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open.set(true)>
                        {icon("send")}
                        "New campaign"
                    </Button>
                </div>
            </div>
            <p class="muted">{SendCampaign::description()}</p>
            {move || last_sent.get().map(|name| view! {
                <div class="info-box">
                    {format!("Campaign \"{}\" was queued. Delivery progress is under Campaigns.", name)}
                </div>
            })}
            <Show when=move || open.get()>
                <FarmerCampaignModal open=open on_sent=on_sent />
            </Show>
        </PageFrame>
    }
}

/// Template campaign over a recipient selection.
///
/// Each variable takes either a literal or a placeholder token; tokens and
/// variables named after a recipient field are filled per recipient.
#[component]
pub fn FarmerCampaignModal(
    open: RwSignal<bool>,
    /// Called with the broadcast name after a successful send
    #[prop(optional)]
    on_sent: Option<Callback<String>>,
) -> impl IntoView {
    let toast = use_toast();
    let templates = RwSignal::new(Vec::<MessageTemplate>::new());
    let (templates_loading, set_templates_loading) = signal(true);
    let template_name = RwSignal::new(String::new());
    let campaign_name = RwSignal::new(String::new());
    let channel = RwSignal::new(String::new());
    let params = RwSignal::new(BTreeMap::<String, String>::new());
    let selected = RwSignal::new(SelectedRecipients::new());
    let (sending, set_sending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_templates().await {
            Ok(list) => templates.set(list),
            Err(e) => set_error.set(Some(e.message_or("Could not load templates"))),
        }
        set_templates_loading.set(false);
    });

    let current_template = Memo::new(move |_| {
        let name = template_name.get();
        templates.with(|ts| ts.iter().find(|t| t.name == name).cloned())
    });

    // a new template starts with blank values for its own variables
    Effect::new(move |_| {
        let vars = current_template
            .get()
            .map(|t| t.variables)
            .unwrap_or_default();
        params.set(vars.into_iter().map(|v| (v, String::new())).collect());
    });

    let set_param = move |name: String, value: String| {
        params.update(|p| {
            p.insert(name, value);
        });
    };

    let send = move || {
        let Some(template) = current_template.get_untracked() else {
            set_error.set(Some("Choose a template".to_string()));
            return;
        };
        let recipients: Vec<Recipient> = selected.with_untracked(|s| s.as_slice().to_vec());
        if recipients.is_empty() {
            set_error.set(Some("Select at least one recipient".to_string()));
            return;
        }
        let globals = params.get_untracked();
        let empty = empty_param_names(&template, &globals);
        if !empty.is_empty()
            && !confirm(&format!(
                "These parameters are empty: {}. Send anyway?",
                empty.join(", ")
            ))
        {
            return;
        }

        let broadcast_name = SendTemplateMessagesRequest::broadcast_name_or_template(
            &campaign_name.get_untracked(),
            &template.name,
        );
        let channel_number = channel.get_untracked().trim().to_string();
        let req = SendTemplateMessagesRequest {
            template_name: template.name.clone(),
            broadcast_name: broadcast_name.clone(),
            language_code: template.language_code().to_string(),
            channel_number: (!channel_number.is_empty()).then_some(channel_number),
            contacts: build_contacts(&template, &globals, &recipients),
        };
        set_error.set(None);
        set_sending.set(true);
        spawn_local(async move {
            let result = api::send_template_messages(&req).await;
            set_sending.set(false);
            if !result.success {
                set_error.set(result.error);
                return;
            }
            toast.success(format!(
                "Campaign \"{}\" sent to {} recipient(s)",
                broadcast_name,
                req.contacts.len()
            ));
            spawn_local(api::record_history(history_entries(
                &recipients,
                &broadcast_name,
                &req.template_name,
                now_utc(),
            )));
            open.set(false);
            if let Some(cb) = on_sent {
                cb.run(broadcast_name);
            }
        });
    };

    let preview_text = move || {
        let template = current_template.get()?;
        let sample = selected.with(|s| s.as_slice().first().cloned());
        Some(params.with(|g| preview(&template, g, sample.as_ref())))
    };

    view! {
        <Modal
            open=open
            title="Farmer campaign".to_string()
            actions=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| send()
                        disabled=move || sending.get() || templates_loading.get()
                    >
                        {move || {
                            if sending.get() {
                                "Sending...".to_string()
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
                <div class="form__grid">
                    <div class="form__row">
                        <Label>"Campaign name"</Label>
                        <Input value=campaign_name placeholder="Defaults to the template name" />
                    </div>
                    <div class="form__row">
                        <Label>"Sender number"</Label>
                        <Input value=channel input_type=InputType::Tel placeholder="Optional" />
                    </div>
                </div>
                <div class="form__row">
                    <Label>"Template"</Label>
                    <Show when=move || !templates_loading.get() fallback=|| view! { <Spinner /> }>
                        <Select value=template_name>
                            <option value="">"Choose a template"</option>
                            {move || {
                                templates
                                    .get()
                                    .into_iter()
                                    .map(|t| {
                                        let label = match t.category.as_deref() {
                                            Some(c) if !c.is_empty() => format!("{} ({})", t.name, c),
                                            _ => t.name.clone(),
                                        };
                                        view! { <option value=t.name.clone()>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </Select>
                    </Show>
                </div>

                {move || {
                    let template = current_template.get()?;
                    if template.variables.is_empty() {
                        return Some(view! { <p class="muted">"This template has no parameters"</p> }.into_any());
                    }
                    Some(
                        template
                            .variables
                            .into_iter()
                            .map(|var| {
                                let for_value = var.clone();
                                let for_input = var.clone();
                                view! {
                                    <div class="form__row param-row">
                                        <Label>{format!("{{{{{}}}}}", var)}</Label>
                                        <input
                                            type="text"
                                            class="form__input"
                                            placeholder="Value or placeholder"
                                            prop:value=move || {
                                                params.with(|p| p.get(&for_value).cloned().unwrap_or_default())
                                            }
                                            on:input=move |ev| set_param(for_input.clone(), event_target_value(&ev))
                                        />
                                        <div class="token-chips">
                                            {PlaceholderToken::all()
                                                .into_iter()
                                                .map(|token| {
                                                    let var = var.clone();
                                                    view! {
                                                        <button
                                                            class="chip chip--token"
                                                            on:click=move |_| set_param(var.clone(), token.token().to_string())
                                                        >
                                                            {token.token()}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any(),
                    )
                }}

                {move || preview_text().map(|text| view! {
                    <div class="message-preview">
                        <div class="message-preview__label">"Preview"</div>
                        <pre class="message-preview__body">{text}</pre>
                    </div>
                })}

                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}

                <RecipientSelector selected=selected with_lists=true />
            </div>
        </Modal>
    }
}
