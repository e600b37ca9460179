use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / next / last buttons over 1-based pages
#[component]
pub fn PaginationControls(
    /// Current page, 1-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    #[prop(into)]
    total_count: Signal<usize>,
    on_page_change: Callback<usize>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let last = move || total_pages.get().max(1);
    let at_start = move || disabled.get() || current_page.get() <= 1;
    let at_end = move || disabled.get() || current_page.get() >= last();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current_page.get(), last(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run((current_page.get() + 1).min(last()))
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
