//! Create Form Controller
//!
//! Visibility, field values and submission of the "add user" form.

use leptos::prelude::*;
use log::debug;

use crate::api::UserApi;
use crate::controller::UserListController;
use crate::error::MutationError;
use crate::notify::Notify;
use crate::store::{AppStateStoreFields, AppStore};
use crate::validation::{self, Field, FieldErrors, UserForm};

/// Create form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub visible: bool,
    pub fields: UserForm,
    pub errors: FieldErrors,
    /// A create request is in flight
    pub submitting: bool,
}

impl CreateForm {
    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            "Close form"
        } else {
            "Add user"
        }
    }

    /// Hide and clear everything
    pub fn reset(&mut self) {
        *self = CreateForm::default();
    }
}

pub struct CreateFormController<A, N> {
    users: UserListController<A, N>,
}

impl<A, N: Clone> Clone for CreateFormController<A, N> {
    fn clone(&self) -> Self {
        Self { users: self.users.clone() }
    }
}

impl<A: UserApi, N: Notify> CreateFormController<A, N> {
    pub fn new(users: UserListController<A, N>) -> Self {
        Self { users }
    }

    fn store(&self) -> AppStore {
        self.users.store()
    }

    /// Current form state (untracked)
    pub fn form(&self) -> CreateForm {
        self.store().form().get_untracked()
    }

    pub fn toggle_visibility(&self) {
        self.store().form().update(|form| form.visible = !form.visible);
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.store().form().update(|form| {
            form.errors.apply(field, validation::validate_field(field, &value));
            form.fields.set(field, value);
        });
    }

    /// Validate and create; on success the form hides and clears
    pub async fn submit(&self) -> Result<(), MutationError> {
        let store = self.store();
        let input = store
            .form()
            .try_update(|form| {
                if form.submitting {
                    return Err(MutationError::Busy);
                }
                match validation::validate(&form.fields) {
                    Ok(input) => {
                        form.errors.clear();
                        form.submitting = true;
                        Ok(input)
                    }
                    Err(errors) => {
                        form.errors = errors.clone();
                        Err(MutationError::Rejected(errors))
                    }
                }
            })
            .unwrap_or(Err(MutationError::Busy))
            .inspect_err(|e| debug!("[FORM] Submit blocked: {}", e))?;

        let result = self.users.create(&input).await;

        store.form().update(|form| {
            if result.is_ok() {
                form.reset();
            } else {
                form.submitting = false;
            }
        });
        result.map_err(MutationError::from)
    }
}
