use crate::layout::center::{Center, TabStrip};
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Navbar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Sidebar, tab strip and the content of every opened tab.
///
/// Sign-in is handled outside the console; the bearer token, when present in
/// local storage, is attached by the request layer.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore `?active=` from the URL and keep it in sync afterwards.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=move || {
                view! {
                    <Center>
                        <TabStrip />
                        <For
                            each=move || tabs_store.opened.get()
                            key=|tab| tab.key.clone()
                            children=move |tab: TabData| {
                                view! { <TabPage tab=tab tabs_store=tabs_store /> }
                            }
                        />
                    </Center>
                }
                    .into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
