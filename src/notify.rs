//! Notifications
//!
//! Fire-and-forget user messages. The UI shows them as toasts that dismiss
//! themselves after a while.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::TOAST_TIMEOUT_MS;
use crate::store::{AppStateStoreFields, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }
}

/// Notification collaborator
pub trait Notify {
    fn notify(&self, notice: Notice);
}

/// A notice on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Shows notices in the app store's toast list
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
}

impl ToastNotifier {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn dismiss(&self, id: u32) {
        self.store.toasts().update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notify for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let id = self.store.next_toast_id().try_update(|next| {
            *next = next.wrapping_add(1);
            *next
        });
        let Some(id) = id else { return };
        self.store.toasts().update(|toasts| toasts.push(Toast { id, notice }));

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            notifier.dismiss(id);
        });
    }
}
