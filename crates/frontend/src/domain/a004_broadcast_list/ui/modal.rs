use crate::domain::a004_broadcast_list::api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::Modal;
use crate::shared::recipient_selector::RecipientSelector;
use contracts::domain::a004_broadcast_list::{ListKind, ListRef, SaveBroadcastListDto};
use contracts::shared::recipients::SelectedRecipients;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const KIND_FARMER: &str = "farmer";
const KIND_CONTACT: &str = "contact";

fn kind_from_code(code: &str) -> ListKind {
    if code == KIND_CONTACT {
        ListKind::ContactList
    } else {
        ListKind::FarmerList
    }
}

/// Create or edit a saved list. Mounted only while open, so every opening
/// starts from a clean state.
#[component]
pub fn BroadcastListModal(
    open: RwSignal<bool>,
    /// List being edited; `None` creates a new one
    editing: Option<ListRef>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let kind_code = RwSignal::new(KIND_FARMER.to_string());
    let selected = RwSignal::new(SelectedRecipients::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let editing_id = editing.as_ref().map(|l| l.id.clone());
    let is_edit = editing.is_some();

    if let Some(list_ref) = editing {
        kind_code.set(
            match list_ref.kind {
                ListKind::FarmerList => KIND_FARMER,
                ListKind::ContactList => KIND_CONTACT,
            }
            .to_string(),
        );
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_list(&list_ref).await {
                Ok(list) => {
                    name.set(list.name.clone());
                    description.set(list.description.clone().unwrap_or_default());
                    selected.update(|s| {
                        for member in list.members() {
                            s.add(member);
                        }
                    });
                }
                Err(e) => set_error.set(Some(e.message_or("Could not load the list"))),
            }
            set_loading.set(false);
        });
    }

    let save = move || {
        let kind = kind_from_code(&kind_code.get_untracked());
        let picked: Vec<_> = selected.with_untracked(|s| s.iter().cloned().collect());
        let (dto, skipped) = SaveBroadcastListDto::from_selection(
            kind,
            &name.get_untracked(),
            &description.get_untracked(),
            &picked,
        );
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        if skipped > 0 {
            toast.warning(format!(
                "{} recipient(s) are not stored farmers and were left out of the farmer list",
                skipped
            ));
        }
        set_error.set(None);
        set_saving.set(true);
        let id = editing_id.clone();
        spawn_local(async move {
            match api::save_list(kind, id.as_deref(), &dto).await {
                Ok(()) => {
                    toast.success(format!("List \"{}\" saved", dto.name));
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("saving list failed: {}", e);
                    set_error.set(Some(e.message_or("Could not save the list")));
                }
            }
            set_saving.set(false);
        });
    };
    let save = StoredValue::new(save);

    let title = if is_edit { "Edit list" } else { "New list" };

    view! {
        <Modal
            open=open
            title=title.to_string()
            actions=std::sync::Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save.with_value(|f| f())
                        disabled=move || saving.get() || loading.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form">
                <div class="form__row">
                    <Label>"Name"</Label>
                    <Input value=name placeholder="e.g. Wai onion growers" />
                </div>
                <div class="form__row">
                    <Label>"Description"</Label>
                    <Input value=description placeholder="Optional" />
                </div>
                <div class="form__row">
                    <Label>"Type"</Label>
                    <Select value=kind_code disabled=is_edit>
                        <option value=KIND_FARMER>{ListKind::FarmerList.display_name()}</option>
                        <option value=KIND_CONTACT>{ListKind::ContactList.display_name()}</option>
                    </Select>
                </div>
                {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <RecipientSelector selected=selected />
                </Show>
            </div>
        </Modal>
    }
}
