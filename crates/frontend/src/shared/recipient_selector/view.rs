use super::api;
use crate::domain::a004_broadcast_list::api as list_api;
use crate::layout::toast_service::use_toast;
use crate::shared::components::{HeaderCheckbox, PaginationControls, SearchInput, TableCheckbox};
use crate::shared::icons::icon;
use contracts::domain::a002_public_lead::PublicLink;
use contracts::domain::a004_broadcast_list::{BroadcastList, ListKind, ListRef};
use contracts::shared::recipients::{ManualAddOutcome, Recipient, SelectedRecipients};
use contracts::shared::settings::SEARCH_DEBOUNCE_MS;
use contracts::shared::source_state::{SourceState, SourceTab};
use leptos::prelude::*;
use leptos::task::spawn_local;

const VISIBLE_CHIPS: usize = 40;

fn filter_input(
    placeholder: &'static str,
    value: Signal<String>,
    disabled: Signal<bool>,
    on_commit: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="filter-input"
            placeholder=placeholder
            prop:value=move || value.get()
            prop:disabled=move || disabled.get()
            on:change=move |ev| on_commit(event_target_value(&ev).trim().to_string())
        />
    }
}

/// Picker over farmers, sales customers, public leads, typed numbers and
/// saved lists. Writes into `selected`; the owner decides what to send.
#[component]
pub fn RecipientSelector(
    selected: RwSignal<SelectedRecipients>,
    #[prop(optional)]
    search_delay_ms: Option<u32>,
    /// Offer saved lists as a source
    #[prop(optional)]
    with_lists: bool,
) -> impl IntoView {
    let toast = use_toast();
    let state = RwSignal::new(SourceState::default());
    let search = RwSignal::new(String::new());
    let links = RwSignal::new(Vec::<PublicLink>::new());
    let farmer_lists = RwSignal::new(Vec::<BroadcastList>::new());
    let contact_lists = RwSignal::new(Vec::<BroadcastList>::new());
    let chosen_lists = RwSignal::new(Vec::<ListRef>::new());
    let lists_loading = RwSignal::new(false);
    let list_generation = StoredValue::new(0u64);
    let manual_input = RwSignal::new(String::new());
    let manual_error = RwSignal::new(None::<String>);

    let list_mode = Signal::derive(move || selected.with(|s| s.is_list_mode()));
    let rows = Memo::new(move |_| {
        state.with(|s| selected.with(|sel| sel.table_rows(&s.items).to_vec()))
    });
    let table_loading = Signal::derive(move || {
        !list_mode.get() && state.with(|s| s.load.is_loading())
    });

    let fetch = move || {
        if !state.with_untracked(|s| s.tab.is_remote()) {
            return;
        }
        let Some((tab, generation, query)) = state.try_update(|s| {
            let generation = s.begin_fetch();
            (s.tab, generation, s.query())
        }) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_source(tab, &query).await;
            let applied = state
                .try_update(|s| match result {
                    Ok((items, pagination)) => s.apply_page(generation, items, pagination),
                    Err(e) => s.apply_error(generation, e.message_or("Could not load recipients")),
                })
                .unwrap_or(false);
            if !applied {
                log::debug!(
                    "dropped stale {} response (generation {})",
                    tab.label(),
                    generation
                );
            }
        });
    };

    Effect::new(move |_| {
        let term = search.get();
        if state.with_untracked(|s| s.search != term) {
            state.update(|s| s.set_search(term));
            fetch();
        }
    });

    spawn_local(async move {
        match api::fetch_public_links().await {
            Ok(v) => links.set(v),
            Err(e) => log::warn!("public links unavailable: {}", e),
        }
    });

    if with_lists {
        spawn_local(async move {
            match list_api::fetch_lists(ListKind::FarmerList).await {
                Ok(v) => farmer_lists.set(v),
                Err(e) => log::warn!("farmer lists unavailable: {}", e),
            }
            match list_api::fetch_lists(ListKind::ContactList).await {
                Ok(v) => contact_lists.set(v),
                Err(e) => log::warn!("contact lists unavailable: {}", e),
            }
        });
    }

    fetch();

    let switch_tab = move |tab: SourceTab| {
        if state.with_untracked(|s| s.tab == tab) {
            return;
        }
        state.update(|s| s.switch_tab(tab));
        search.set(String::new());
        manual_error.set(None);
        fetch();
    };

    let clear_filters = move || {
        state.update(|s| s.clear_filters());
        search.set(String::new());
        fetch();
    };

    let add_manual = move || {
        let raw = manual_input.get_untracked();
        let loaded = state.with_untracked(|s| s.items.clone());
        match selected.try_update(|sel| sel.add_manual(&raw, &loaded)) {
            Some(Ok(ManualAddOutcome::ListModeLocked)) => manual_error.set(Some(
                "Saved lists are loaded. Pick recipients individually to add numbers".to_string(),
            )),
            Some(Ok(_)) => {
                manual_input.set(String::new());
                manual_error.set(None);
            }
            Some(Err(e)) => manual_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let reload_lists = move |chosen: Vec<ListRef>, previous: Vec<ListRef>| {
        let generation = list_generation.get_value() + 1;
        list_generation.set_value(generation);
        if chosen.is_empty() {
            lists_loading.set(false);
            selected.update(|s| s.exit_list_mode());
            return;
        }
        lists_loading.set(true);
        spawn_local(async move {
            let result = api::load_list_members(&chosen).await;
            if list_generation.try_get_value() != Some(generation) {
                log::debug!("dropped stale list members (generation {})", generation);
                return;
            }
            lists_loading.set(false);
            match result {
                Ok(members) => selected.update(|s| s.replace_from_lists(members)),
                Err(e) => {
                    chosen_lists.set(previous);
                    toast.error(e.message_or("Could not load the saved list"));
                }
            }
        });
    };

    let toggle_list = move |id: String, checked: bool| {
        let kind = farmer_lists.with_untracked(|farmers| {
            contact_lists.with_untracked(|contacts| ListKind::classify(&id, farmers, contacts))
        });
        let Some(kind) = kind else {
            log::warn!("list {} is in neither collection", id);
            return;
        };
        let list = ListRef { id, kind };
        let previous = chosen_lists.get_untracked();
        chosen_lists.update(|c| {
            c.retain(|l| l != &list);
            if checked {
                c.push(list);
            }
        });
        reload_lists(chosen_lists.get_untracked(), previous);
    };

    let exit_lists = move || {
        let previous = chosen_lists.get_untracked();
        chosen_lists.set(Vec::new());
        reload_lists(Vec::new(), previous);
    };

    let is_manual = move || state.with(|s| s.tab == SourceTab::Manual);
    let is_leads = move || state.with(|s| s.tab == SourceTab::PublicLeads);
    let filters_disabled =
        Signal::derive(move || list_mode.get() || state.with(|s| s.load.is_loading()));

    view! {
        <div class="recipient-selector">
            <div class="tab-buttons">
                {SourceTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab-button"
                                class:tab-button--active=move || state.with(|s| s.tab == tab)
                                on:click=move |_| switch_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || with_lists>
                <div class="recipient-selector__lists">
                    <span class="recipient-selector__lists-title">"Saved lists"</span>
                    {move || {
                        let farmers = farmer_lists.get();
                        let contacts = contact_lists.get();
                        farmers
                            .into_iter()
                            .chain(contacts)
                            .map(|list| {
                                let id = list.id.clone();
                                let id_for_check = id.clone();
                                let label = format!("{} ({})", list.name, list.size());
                                view! {
                                    <label class="list-chip">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                chosen_lists.with(|c| c.iter().any(|l| l.id == id_for_check))
                                            }
                                            on:change=move |ev| toggle_list(id.clone(), event_target_checked(&ev))
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || list_mode.get()>
                        <button class="button button--secondary" on:click=move |_| exit_lists()>
                            {icon("x")}
                            "Pick recipients individually"
                        </button>
                    </Show>
                    <Show when=move || lists_loading.get()>
                        <span class="muted">"Loading list members..."</span>
                    </Show>
                </div>
            </Show>

            <Show
                when=is_manual
                fallback=move || {
                    view! {
                        <div class="filters">
                            <SearchInput
                                value=search
                                delay_ms=search_delay_ms.unwrap_or(SEARCH_DEBOUNCE_MS)
                                placeholder="Search name or mobile"
                            />
                            {filter_input(
                                "District",
                                Signal::derive(move || state.with(|s| s.geo.district.clone())),
                                filters_disabled,
                                move |v| {
                                    state.update(|s| s.set_district(v));
                                    fetch();
                                },
                            )}
                            {filter_input(
                                "Taluka",
                                Signal::derive(move || state.with(|s| s.geo.taluka.clone())),
                                filters_disabled,
                                move |v| {
                                    state.update(|s| s.set_taluka(v));
                                    fetch();
                                },
                            )}
                            {filter_input(
                                "Village",
                                Signal::derive(move || state.with(|s| s.geo.village.clone())),
                                filters_disabled,
                                move |v| {
                                    state.update(|s| s.set_village(v));
                                    fetch();
                                },
                            )}
                            <Show when=is_leads>
                                <select
                                    class="filter-select"
                                    prop:value=move || state.with(|s| s.link_id.clone())
                                    on:change=move |ev| {
                                        let link = event_target_value(&ev);
                                        state.update(|s| s.set_link(link));
                                        fetch();
                                    }
                                >
                                    <option value="">"All links"</option>
                                    {move || {
                                        links
                                            .get()
                                            .into_iter()
                                            .map(|l| view! { <option value=l.id.clone()>{l.name}</option> })
                                            .collect_view()
                                    }}
                                </select>
                            </Show>
                            <button class="button button--secondary" on:click=move |_| clear_filters()>
                                "Clear filters"
                            </button>
                            <button class="button button--secondary" on:click=move |_| fetch()>
                                {icon("refresh")}
                            </button>
                        </div>

                        {move || {
                            state
                                .with(|s| s.load.error().map(str::to_string))
                                .map(|e| {
                                    view! {
                                        <div class="warning-box warning-box--error">
                                            <span class="warning-box__icon">"⚠"</span>
                                            <span class="warning-box__text">{e}</span>
                                        </div>
                                    }
                                })
                        }}

                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <HeaderCheckbox
                                            checked=Signal::derive(move || {
                                                rows.with(|r| selected.with(|sel| sel.all_selected(r)))
                                            })
                                            on_toggle=Callback::new(move |_| {
                                                let items: Vec<Recipient> = rows.get_untracked();
                                                selected.update(|sel| sel.select_all(&items));
                                            })
                                            disabled=list_mode
                                        />
                                        <th class="table__header-cell">"Name"</th>
                                        <th class="table__header-cell">"Mobile"</th>
                                        <th class="table__header-cell">"Village"</th>
                                        <th class="table__header-cell">"Taluka"</th>
                                        <th class="table__header-cell">"District"</th>
                                        <Show when=is_leads>
                                            <th class="table__header-cell">"Link"</th>
                                        </Show>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        let items = rows.get();
                                        if table_loading.get() {
                                            return view! {
                                                <tr><td class="table__cell table__cell--empty" colspan="7">"Loading..."</td></tr>
                                            }
                                            .into_any();
                                        }
                                        if items.is_empty() {
                                            return view! {
                                                <tr><td class="table__cell table__cell--empty" colspan="7">"No records"</td></tr>
                                            }
                                            .into_any();
                                        }
                                        items
                                            .into_iter()
                                            .map(|record| {
                                                let key = record.dedup_key();
                                                let key_for_row = key.clone();
                                                let link = record.link_name.clone().unwrap_or_default();
                                                let name = record.display_name().to_string();
                                                let phone = record.phone.clone();
                                                let village = record.village.clone();
                                                let taluka = record.taluka.clone();
                                                let district = record.district.clone();
                                                view! {
                                                    <tr
                                                        class="table__row"
                                                        class:table__row--selected=move || {
                                                            selected.with(|sel| sel.contains_key(&key_for_row))
                                                        }
                                                    >
                                                        <TableCheckbox
                                                            checked=Signal::derive(move || selected.with(|sel| sel.contains_key(&key)))
                                                            on_change=Callback::new(move |_| selected.update(|sel| sel.toggle(&record)))
                                                            disabled=list_mode
                                                        />
                                                        <td class="table__cell">{name}</td>
                                                        <td class="table__cell">{phone}</td>
                                                        <td class="table__cell">{village}</td>
                                                        <td class="table__cell">{taluka}</td>
                                                        <td class="table__cell">{district}</td>
                                                        <Show when=is_leads>
                                                            <td class="table__cell">{link.clone()}</td>
                                                        </Show>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }}
                                </tbody>
                            </table>
                        </div>

                        <Show when=move || !list_mode.get()>
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || state.with(|s| s.pagination.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.pagination.total))
                                on_page_change=Callback::new(move |page| {
                                    state.update(|s| s.go_to_page(page));
                                    fetch();
                                })
                                disabled=filters_disabled
                            />
                        </Show>
                    }
                }
            >
                <div class="manual-entry">
                    <input
                        type="tel"
                        class="filter-input"
                        placeholder="10-digit mobile number"
                        prop:value=move || manual_input.get()
                        prop:disabled=move || list_mode.get()
                        on:input=move |ev| manual_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                add_manual();
                            }
                        }
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| add_manual()
                        disabled=move || list_mode.get()
                    >
                        {icon("plus")}
                        "Add"
                    </button>
                    {move || manual_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                </div>
            </Show>

            <div class="recipient-selector__selected">
                <div class="recipient-selector__summary">
                    <strong>{move || format!("{} selected", selected.with(|s| s.len()))}</strong>
                    <button
                        class="button button--secondary"
                        on:click=move |_| selected.update(|s| s.clear())
                        disabled=move || list_mode.get() || selected.with(|s| s.is_empty())
                    >
                        "Clear selection"
                    </button>
                </div>
                <div class="chips">
                    {move || {
                        let (chips, hidden) = selected.with(|s| {
                            let chips: Vec<(String, String)> = s
                                .iter()
                                .take(VISIBLE_CHIPS)
                                .map(|r| (r.id.clone(), format!("{} {}", r.display_name(), r.phone)))
                                .collect();
                            (chips, s.len().saturating_sub(VISIBLE_CHIPS))
                        });
                        let locked = list_mode.get();
                        view! {
                            {chips
                                .into_iter()
                                .map(|(id, label)| {
                                    view! {
                                        <span class="chip">
                                            {label}
                                            <Show when=move || !locked>
                                                <button
                                                    class="chip__remove"
                                                    on:click={
                                                        let id = id.clone();
                                                        move |_| selected.update(|s| s.remove(&id))
                                                    }
                                                >
                                                    {icon("x")}
                                                </button>
                                            </Show>
                                        </span>
                                    }
                                })
                                .collect_view()}
                            {(hidden > 0).then(|| view! { <span class="chip chip--more">{format!("+{} more", hidden)}</span> })}
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
