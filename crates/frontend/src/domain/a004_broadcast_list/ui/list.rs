use super::BroadcastListModal;
use crate::domain::a004_broadcast_list::api;
use crate::layout::toast_service::use_toast;
use crate::shared::browser::confirm;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_broadcast_list::{BroadcastList, ListKind, ListRef};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
struct ListRow {
    id: String,
    kind: ListKind,
    name: String,
    description: String,
    size: usize,
    created_at: String,
}

impl ListRow {
    fn new(list: BroadcastList, kind: ListKind) -> Self {
        Self {
            size: list.size(),
            created_at: format_opt_date(list.created_at.as_deref()),
            description: list.description.unwrap_or_default(),
            id: list.id,
            kind,
            name: list.name,
        }
    }

    fn list_ref(&self) -> ListRef {
        ListRef {
            id: self.id.clone(),
            kind: self.kind,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BroadcastListPage() -> impl IntoView {
    let toast = use_toast();
    let (rows, set_rows) = signal::<Vec<ListRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let filter = RwSignal::new(String::new());
    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<ListRef>);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            let mut all = Vec::new();
            let mut failure = None;
            for kind in [ListKind::FarmerList, ListKind::ContactList] {
                match api::fetch_lists(kind).await {
                    Ok(lists) => all.extend(lists.into_iter().map(|l| ListRow::new(l, kind))),
                    Err(e) => failure = Some(e.message_or("Could not load saved lists")),
                }
            }
            set_rows.set(all);
            set_error.set(failure);
            set_loading.set(false);
        });
    };

    let open_new = move || {
        editing.set(None);
        modal_open.set(true);
    };

    let open_edit = move |list: ListRef| {
        editing.set(Some(list));
        modal_open.set(true);
    };

    let delete = move |row: ListRow| {
        if !confirm(&format!("Delete the list \"{}\"?", row.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_list(&row.list_ref()).await {
                Ok(()) => {
                    toast.success(format!("List \"{}\" deleted", row.name));
                    fetch();
                }
                Err(e) => toast.error(e.message_or("Could not delete the list")),
            }
        });
    };

    let visible = move || {
        let term = filter.get().trim().to_lowercase();
        rows.get()
            .into_iter()
            .filter(|r| term.is_empty() || r.name.to_lowercase().contains(&term))
            .collect::<Vec<_>>()
    };

    let on_saved = Callback::new(move |_| {
        modal_open.set(false);
        fetch();
    });

    fetch();

    view! {
        <PageFrame page_id="a004_broadcast_list--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Broadcast lists"</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new()>
                        {icon("plus")}
                        "New list"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="filters">
                <Input value=filter placeholder="Filter by name" />
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell table__header-cell--number">"Members"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="6"><Spinner /></td></tr>
                                }
                                .into_any();
                            }
                            let items = visible();
                            if items.is_empty() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="6">"No saved lists"</td></tr>
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|row| {
                                    let for_edit = row.list_ref();
                                    let for_delete = row.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_edit(for_edit.clone())>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.kind.display_name()}</td>
                                            <td class="table__cell">{row.description}</td>
                                            <td class="table__cell table__cell--number">{row.size}</td>
                                            <td class="table__cell">{row.created_at}</td>
                                            <td class="table__cell" on:click=|e| e.stop_propagation()>
                                                <button
                                                    class="button button--ghost"
                                                    title="Delete"
                                                    on:click=move |_| delete(for_delete.clone())
                                                >
                                                    {icon("x")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || modal_open.get()>
                <BroadcastListModal
                    open=modal_open
                    editing=editing.get_untracked()
                    on_saved=on_saved
                />
            </Show>
        </PageFrame>
    }
}
