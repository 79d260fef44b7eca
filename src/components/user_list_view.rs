//! User List View Component
//!
//! Renders the snapshot as cards, or the empty state.

use leptos::prelude::*;

use crate::components::UserCard;
use crate::context::use_app;
use crate::store::{store_empty_text, AppStateStoreFields};

#[component]
pub fn UserListView() -> impl IntoView {
    let store = use_app().store;

    let is_empty = move || store.users().with(|users| users.is_empty());
    let empty_text = move || store_empty_text(&store);

    view! {
        <section class="user-list">
            <Show
                when=move || !is_empty()
                fallback=move || view! { <p class="empty-state">{empty_text}</p> }
            >
                <For
                    each=move || store.users().get()
                    // Whole record as key: a changed field re-renders the card
                    key=|user| user.clone()
                    children=move |user| view! { <UserCard user=user /> }
                />
            </Show>
        </section>
    }
}
