//! Toast Stack Component
//!
//! Notification toasts; click to dismiss early.

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::AppStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let notifier = ctx.notifier;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.notice.severity.as_str())
                            on:click=move |_| notifier.dismiss(id)
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
