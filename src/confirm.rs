//! Confirmation Prompts
//!
//! Yes/no decision asked before destructive actions.

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_user(name: &str) -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: format!("You are about to delete user {}. This action cannot be undone!", name),
            confirm_label: "Yes, delete!".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// Confirmation collaborator
#[async_trait(?Send)]
pub trait Confirm {
    /// `true` when the user affirmed
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

struct PendingConfirm {
    prompt: ConfirmPrompt,
    reply: oneshot::Sender<bool>,
}

/// Modal confirmation answered through `ConfirmDialog`
///
/// Only one prompt is open at a time; opening another cancels the first.
#[derive(Clone, Copy)]
pub struct DialogConfirmer {
    pending: RwSignal<Option<PendingConfirm>>,
}

impl DialogConfirmer {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }

    /// Prompt currently waiting for an answer (tracked)
    pub fn prompt(&self) -> Option<ConfirmPrompt> {
        self.pending.with(|p| p.as_ref().map(|p| p.prompt.clone()))
    }

    pub fn answer(&self, affirmed: bool) {
        if let Some(pending) = self.pending.try_update(|slot| slot.take()).flatten() {
            let _ = pending.reply.send(affirmed);
        }
    }
}

impl Default for DialogConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Confirm for DialogConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let (reply, answer) = oneshot::channel();
        self.pending.set(Some(PendingConfirm { prompt: prompt.clone(), reply }));
        // A replaced or dropped prompt counts as cancel
        answer.await.unwrap_or(false)
    }
}
