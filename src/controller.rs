//! User List Controller
//!
//! Owns the snapshot of users and every write to the remote store. A write
//! never patches the snapshot in place: once the store accepts it, the whole
//! list is fetched again and swapped in.
//!
//! A record that has left the snapshot is authoritative. Results of a save
//! or delete that finish after their record vanished are dropped without a
//! notification.

use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, error, info, warn};

use crate::api::UserApi;
use crate::confirm::{Confirm, ConfirmPrompt};
use crate::error::{ApiError, MutationError, CONFLICT_MESSAGE};
use crate::models::{User, UserId, UserInput};
use crate::notify::{Notice, Notify};
use crate::session::EditSession;
use crate::store::{
    store_find_user, store_replace_users, store_session, AppStateStoreFields, AppStore,
};
use crate::validation::Field;

pub const FETCH_FAILED: &str = "could not load users";
pub const CREATE_FAILED: &str = "could not create user";
pub const UPDATE_FAILED: &str = "could not update user";
pub const DELETE_FAILED: &str = "could not delete user";
pub const CREATED: &str = "User created successfully.";
pub const UPDATED: &str = "User updated successfully.";
pub const DELETED: &str = "User deleted successfully.";

/// Result of a delete request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
}

pub struct UserListController<A, N> {
    api: Arc<A>,
    notifier: N,
    store: AppStore,
}

impl<A, N: Clone> Clone for UserListController<A, N> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            notifier: self.notifier.clone(),
            store: self.store,
        }
    }
}

impl<A: UserApi, N: Notify> UserListController<A, N> {
    pub fn new(api: A, notifier: N, store: AppStore) -> Self {
        Self {
            api: Arc::new(api),
            notifier,
            store,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Current snapshot (untracked)
    pub fn users(&self) -> Vec<User> {
        self.store.users().get_untracked()
    }

    pub fn session(&self, id: &UserId) -> EditSession {
        store_session(&self.store, id)
    }

    fn is_listed(&self, id: &UserId) -> bool {
        store_find_user(&self.store, id).is_some()
    }

    fn report_failure(&self, action: &str, err: &ApiError, generic: &str) {
        if err.is_conflict() {
            warn!("[USERS] {} rejected: duplicate email", action);
            self.notifier.notify(Notice::error(CONFLICT_MESSAGE));
        } else {
            error!("[USERS] {} failed: {}", action, err);
            self.notifier.notify(Notice::error(generic));
        }
    }

    // ========================
    // Snapshot
    // ========================

    /// Replace the snapshot with the store's full list
    ///
    /// On failure the snapshot is left as it was. Overlapping fetches are not
    /// ordered: whichever completes last wins.
    pub async fn fetch_all(&self) -> Result<(), ApiError> {
        self.store.pending_fetches().update(|n| *n += 1);
        let result = self.api.list().await;
        self.store.pending_fetches().update(|n| *n = n.saturating_sub(1));

        match result {
            Ok(users) => {
                info!("[USERS] Loaded {} users", users.len());
                store_replace_users(&self.store, users);
                Ok(())
            }
            Err(err) => {
                error!("[USERS] Fetch failed: {}", err);
                self.notifier.notify(Notice::warning(FETCH_FAILED));
                Err(err)
            }
        }
    }

    async fn refresh(&self) {
        // Failures are already reported by fetch_all
        let _ = self.fetch_all().await;
    }

    // ========================
    // Writes
    // ========================

    /// Create a user from already validated input
    pub async fn create(&self, input: &UserInput) -> Result<(), ApiError> {
        match self.api.create(input).await {
            Ok(()) => {
                info!("[USERS] Created {}", input.email);
                self.notifier.notify(Notice::success(CREATED));
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.report_failure("create", &err, CREATE_FAILED);
                Err(err)
            }
        }
    }

    /// Send a full update for one record
    pub async fn update(&self, id: &UserId, input: &UserInput) -> Result<(), ApiError> {
        match self.api.update(id, input).await {
            Ok(()) => {
                info!("[USERS] Updated {}", id);
                self.notifier.notify(Notice::success(UPDATED));
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                if self.is_listed(id) {
                    self.report_failure("update", &err, UPDATE_FAILED);
                } else {
                    debug!("[USERS] Dropping update result for vanished user {}", id);
                }
                Err(err)
            }
        }
    }

    /// Delete a record after the user confirms
    pub async fn delete<C>(&self, id: &UserId, confirmer: &C) -> Result<DeleteOutcome, MutationError>
    where
        C: Confirm + ?Sized,
    {
        let user = store_find_user(&self.store, id).ok_or(MutationError::Vanished)?;
        if self.store.deleting().with_untracked(|d| d.contains(id)) {
            return Err(MutationError::Busy);
        }

        if !confirmer.confirm(&ConfirmPrompt::delete_user(&user.name)).await {
            debug!("[USERS] Delete of {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let started = self.store.deleting().try_update(|d| d.insert(id.clone()));
        if started != Some(true) {
            return Err(MutationError::Busy);
        }
        let result = self.api.delete(id).await;
        self.store.deleting().update(|d| {
            d.remove(id);
        });

        match result {
            Ok(()) => {
                info!("[USERS] Deleted {}", id);
                self.notifier.notify(Notice::success(DELETED));
                self.refresh().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                if self.is_listed(id) {
                    self.report_failure("delete", &err, DELETE_FAILED);
                } else {
                    debug!("[USERS] Dropping delete result for vanished user {}", id);
                }
                Err(err.into())
            }
        }
    }

    pub fn is_deleting(&self, id: &UserId) -> bool {
        self.store.deleting().with_untracked(|d| d.contains(id))
    }

    // ========================
    // Edit Sessions
    // ========================

    /// Switch a record to editing; `false` when it is not listed
    pub fn begin_edit(&self, id: &UserId) -> bool {
        let Some(user) = store_find_user(&self.store, id) else {
            return false;
        };
        self.store.sessions().update(|sessions| {
            sessions.entry(id.clone()).or_default().begin(&user);
        });
        true
    }

    pub fn edit_field(&self, id: &UserId, field: Field, value: String) {
        self.store.sessions().update(|sessions| {
            if let Some(session) = sessions.get_mut(id) {
                session.set_field(field, value);
            }
        });
    }

    /// Leave editing; a draft with an update in flight stays until it settles
    pub fn cancel_edit(&self, id: &UserId) {
        self.store.sessions().update(|sessions| {
            if let Some(session) = sessions.get_mut(id) {
                if session.is_saving() {
                    debug!("[USERS] Cancel of {} ignored while saving", id);
                }
                session.cancel();
            }
        });
    }

    /// Send the record's draft; the session leaves editing only on success
    pub async fn save_edit(&self, id: &UserId) -> Result<(), MutationError> {
        let input = self
            .store
            .sessions()
            .try_update(|sessions| match sessions.get_mut(id) {
                Some(session) => session.start_save(),
                None => Err(MutationError::NotEditing),
            })
            .unwrap_or(Err(MutationError::NotEditing))?;

        let result = self.update(id, &input).await;

        // Sessions of vanished records were pruned with the snapshot
        self.store.sessions().update(|sessions| {
            if let Some(session) = sessions.get_mut(id) {
                if result.is_ok() {
                    session.save_succeeded();
                } else {
                    session.save_failed();
                }
            }
        });
        result.map_err(MutationError::from)
    }
}
