//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::CreateForm;
use crate::models::{User, UserId};
use crate::notify::Toast;
use crate::session::EditSession;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot of the last successful fetch, in store order
    pub users: Vec<User>,
    /// Inline edit sessions by record id
    pub sessions: HashMap<UserId, EditSession>,
    /// Records with a delete request in flight
    pub deleting: HashSet<UserId>,
    /// Number of list requests in flight
    pub pending_fetches: u32,
    /// Create form
    pub form: CreateForm,
    /// Visible notifications
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

pub fn new_app_store() -> AppStore {
    Store::new(AppState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Swap in a new snapshot, dropping per-record state of users that are gone
pub fn store_replace_users(store: &AppStore, users: Vec<User>) {
    let ids: HashSet<UserId> = users.iter().map(|u| u.id.clone()).collect();
    store.sessions().update(|sessions| sessions.retain(|id, _| ids.contains(id)));
    store.deleting().update(|deleting| deleting.retain(|id| ids.contains(id)));
    store.users().update(|current| *current = users);
}

/// Look up a user in the current snapshot
pub fn store_find_user(store: &AppStore, id: &UserId) -> Option<User> {
    store
        .users()
        .with_untracked(|users| users.iter().find(|u| &u.id == id).cloned())
}

pub const LOADING_TEXT: &str = "Loading users...";
pub const EMPTY_TEXT: &str = "no users found";

/// Placeholder shown while the snapshot is empty (tracked)
pub fn store_empty_text(store: &AppStore) -> &'static str {
    if store.pending_fetches().get() > 0 {
        LOADING_TEXT
    } else {
        EMPTY_TEXT
    }
}

/// Session of a record; records without one are viewing
pub fn store_session(store: &AppStore, id: &UserId) -> EditSession {
    store
        .sessions()
        .with_untracked(|sessions| sessions.get(id).cloned().unwrap_or_default())
}
