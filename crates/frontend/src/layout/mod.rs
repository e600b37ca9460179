pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod toast_service;

use leptos::prelude::*;
use toast_service::ToastHost;

/// Console shell.
///
/// ```text
/// +------------------------------------------+
/// |              top bar                     |
/// +------------------------------------------+
/// |  Navbar   |    Content (tabs)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = leptos::context::use_context::<global_context::AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_left() title="Menu">
                    "☰"
                </button>
                <span class="top-header__title">"Agri Console"</span>
            </header>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {center()}
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
