use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tabs, sidebar state and the toast queue are shared by every page.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
