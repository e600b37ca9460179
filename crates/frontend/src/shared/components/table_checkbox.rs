use leptos::prelude::*;

/// Row checkbox cell. Clicks do not reach the row.
#[component]
pub fn TableCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header "select page" checkbox; the callback receives no value, the
/// caller decides between selecting and clearing the page
#[component]
pub fn HeaderCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <th class="table__cell table__cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |_| on_toggle.run(())
            />
        </th>
    }
}
