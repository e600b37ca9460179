//! Search box that reports its value only after the operator stops typing.
//!
//! Every keystroke bumps a generation counter and starts a timer; when the
//! timer fires it only reports if no newer keystroke happened meanwhile and
//! the component is still mounted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[component]
pub fn SearchInput(
    /// Committed value; cleared from outside when the source changes
    value: RwSignal<String>,
    delay_ms: u32,
    #[prop(optional, into)]
    placeholder: Option<String>,
) -> impl IntoView {
    let text = RwSignal::new(value.get_untracked());
    let pending = Arc::new(AtomicU64::new(0));
    let alive = Arc::new(AtomicBool::new(true));

    // external resets (tab switch, clear filters) show up in the box
    Effect::new(move |_| {
        let committed = value.get();
        if text.get_untracked() != committed {
            text.set(committed);
        }
    });

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_input = move |ev| {
        let next = event_target_value(&ev);
        text.set(next.clone());
        let ticket = pending.fetch_add(1, Ordering::Relaxed) + 1;
        let pending = pending.clone();
        let alive = alive.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if alive.load(Ordering::Relaxed) && pending.load(Ordering::Relaxed) == ticket {
                value.set(next);
            }
        });
    };

    view! {
        <input
            type="search"
            class="search-input"
            placeholder=placeholder.unwrap_or_else(|| "Search...".to_string())
            prop:value=move || text.get()
            on:input=on_input
        />
    }
}
