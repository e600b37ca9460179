use leptos::prelude::*;
use thaw::*;

/// Dialog with a title, a body and an action row.
/// Closing through the backdrop sets `open` to false like the Close button.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)]
    title: Signal<String>,
    children: Children,
    #[prop(optional)]
    actions: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>{children()}</DialogContent>
                    <DialogActions>
                        {actions.map(|a| a())}
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
