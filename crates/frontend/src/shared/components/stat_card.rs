use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard tile: icon, label, a preformatted value and an optional subtitle
#[component]
pub fn StatCard(
    label: &'static str,
    /// Name understood by `icon()`
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Modifier such as `"stat-card--warning"`
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let class = if tone.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {}", tone)
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
