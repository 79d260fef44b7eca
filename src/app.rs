//! User List Frontend App
//!
//! Single page: user cards, the create form, toasts and the confirm modal.

use leptos::prelude::*;

use crate::components::{ConfirmDialog, NewUserForm, ToastStack, UserListView};
use crate::config::ApiConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ApiConfig::from_env());
    log::info!("[APP] Using user store at {}", ctx.users().api().config().base_url());

    // Provide context to all children
    provide_context(ctx);

    // Load users on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <main class="user-page">
            <h1 class="page-title">"User List"</h1>

            <UserListView />

            <NewUserForm />
        </main>

        <ConfirmDialog />
        <ToastStack />
    }
}
