use super::CampaignDetail;
use crate::domain::a005_campaign::api;
use crate::shared::components::{PaginationControls, SearchInput};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a005_campaign::Campaign;
use contracts::shared::list_query::{ListQuery, Pagination};
use contracts::shared::settings::SEARCH_DEBOUNCE_MS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CampaignList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Campaign>>(Vec::new());
    let (pagination, set_pagination) = signal(Pagination::default());
    let (page, set_page) = signal(1usize);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());
    let detail_open = RwSignal::new(false);
    let detail_id = RwSignal::new(String::new());

    let fetch = move || {
        let query = ListQuery::page(page.get_untracked()).search(&search.get_untracked());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_campaigns(&query).await {
                Ok(list) => {
                    set_items.set(list.items);
                    set_pagination.set(list.pagination);
                    set_error.set(None);
                }
                Err(e) => {
                    set_items.set(Vec::new());
                    set_error.set(Some(e.message_or("Could not load campaigns")));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |prev: Option<String>| {
        let term = search.get();
        if prev.is_some() {
            set_page.set(1);
            fetch();
        }
        term
    });

    let open_detail = move |id: String| {
        detail_id.set(id);
        detail_open.set(true);
    };

    fetch();

    view! {
        <PageFrame page_id="a005_campaign--list" category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Campaigns"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput value=search delay_ms=SEARCH_DEBOUNCE_MS placeholder="Search campaigns" />
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
                            <th class="table__header-cell">"Campaign"</th>
                            <th class="table__header-cell">"Template"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell table__header-cell--number">"Contacts"</th>
                            <th class="table__header-cell table__header-cell--number">"Sent"</th>
                            <th class="table__header-cell table__header-cell--number">"Delivered"</th>
                            <th class="table__header-cell table__header-cell--number">"Read"</th>
                            <th class="table__header-cell table__header-cell--number">"Failed"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = items.get();
                            if rows.is_empty() {
                                let text = if loading.get() { "Loading..." } else { "No campaigns yet" };
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan="8">{text}</td></tr>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|c| {
                                    let counts = c.counts();
                                    let id = c.id.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_detail(id.clone())>
                                            <td class="table__cell">{c.name.clone()}</td>
                                            <td class="table__cell">{c.template_name.clone()}</td>
                                            <td class="table__cell">{format_opt_date(c.created_at.as_deref())}</td>
                                            <td class="table__cell table__cell--number">{c.contacts.len()}</td>
                                            <td class="table__cell table__cell--number">{counts.sent}</td>
                                            <td class="table__cell table__cell--number">{counts.delivered}</td>
                                            <td class="table__cell table__cell--number">{counts.read}</td>
                                            <td class="table__cell table__cell--number">{counts.failed}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=Signal::derive(move || pagination.get().total_pages)
                total_count=Signal::derive(move || pagination.get().total)
                on_page_change=Callback::new(move |p| {
                    set_page.set(p);
                    fetch();
                })
                disabled=loading
            />

            <Show when=move || detail_open.get()>
                <CampaignDetail open=detail_open id=detail_id.get_untracked() />
            </Show>
        </PageFrame>
    }
}
