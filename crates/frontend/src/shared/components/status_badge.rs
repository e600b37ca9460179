use leptos::prelude::*;

/// Coloured status pill; `class` is one of the `badge--*` modifiers
#[component]
pub fn StatusBadge(#[prop(into)] label: String, class: &'static str) -> impl IntoView {
    view! { <span class=format!("badge {}", class)>{label}</span> }
}
