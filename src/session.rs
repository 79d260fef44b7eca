//! Edit Session
//!
//! Per-record inline edit state. A session starts out viewing; editing
//! carries a draft that is independent from the committed record until a
//! save succeeds.

use crate::error::MutationError;
use crate::models::{User, UserInput};
use crate::validation::{self, Field, FieldErrors, UserForm};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Viewing,
    Editing {
        draft: UserForm,
        errors: FieldErrors,
        /// An update for this draft is in flight
        saving: bool,
    },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, EditSession::Editing { saving: true, .. })
    }

    /// Draft while editing
    pub fn draft(&self) -> Option<&UserForm> {
        match self {
            EditSession::Viewing => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    /// Draft while editing, otherwise the record's own fields
    pub fn draft_or(&self, user: &User) -> UserForm {
        match self.draft() {
            Some(draft) => draft.clone(),
            None => UserForm::from_user(user),
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            EditSession::Viewing => None,
            EditSession::Editing { errors, .. } => Some(errors),
        }
    }

    /// Enter editing with a fresh copy of the record. An ongoing edit keeps
    /// its draft.
    pub fn begin(&mut self, user: &User) {
        if self.is_editing() {
            return;
        }
        *self = EditSession::Editing {
            draft: UserForm::from_user(user),
            errors: FieldErrors::new(),
            saving: false,
        };
    }

    /// Drop the draft without touching the record. A draft with an update in
    /// flight stays until the store answers.
    pub fn cancel(&mut self) {
        if self.is_saving() {
            return;
        }
        *self = EditSession::Viewing;
    }

    /// Change one draft field; ignored while the draft is being saved
    pub fn set_field(&mut self, field: Field, value: String) {
        if let EditSession::Editing { draft, errors, saving: false } = self {
            errors.apply(field, validation::validate_field(field, &value));
            draft.set(field, value);
        }
    }

    /// Validate the draft and mark it in flight
    pub fn start_save(&mut self) -> Result<UserInput, MutationError> {
        match self {
            EditSession::Viewing => Err(MutationError::NotEditing),
            EditSession::Editing { saving: true, .. } => Err(MutationError::Busy),
            EditSession::Editing { draft, errors, saving } => match validation::validate(draft) {
                Ok(input) => {
                    errors.clear();
                    *saving = true;
                    Ok(input)
                }
                Err(found) => {
                    *errors = found.clone();
                    Err(MutationError::Rejected(found))
                }
            },
        }
    }

    /// The store accepted the draft
    pub fn save_succeeded(&mut self) {
        *self = EditSession::Viewing;
    }

    /// The store refused the draft; keep it for correction
    pub fn save_failed(&mut self) {
        if let EditSession::Editing { saving, .. } = self {
            *saving = false;
        }
    }
}
