//! Application Context
//!
//! Controllers and collaborators provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpUserApi;
use crate::config::ApiConfig;
use crate::confirm::DialogConfirmer;
use crate::controller::UserListController;
use crate::form::CreateFormController;
use crate::notify::ToastNotifier;
use crate::store::{new_app_store, AppStore};

pub type AppUsers = UserListController<HttpUserApi, ToastNotifier>;
pub type AppForm = CreateFormController<HttpUserApi, ToastNotifier>;

/// App-wide handles, cheap to copy into view closures
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state read by the views
    pub store: AppStore,
    /// Answers delete prompts through `ConfirmDialog`
    pub confirmer: DialogConfirmer,
    pub notifier: ToastNotifier,
    users: StoredValue<AppUsers>,
    form: StoredValue<AppForm>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let store = new_app_store();
        let notifier = ToastNotifier::new(store);
        let users = UserListController::new(HttpUserApi::new(config), notifier, store);
        let form = CreateFormController::new(users.clone());
        Self {
            store,
            confirmer: DialogConfirmer::new(),
            notifier,
            users: StoredValue::new(users),
            form: StoredValue::new(form),
        }
    }

    pub fn users(&self) -> AppUsers {
        self.users.get_value()
    }

    pub fn form(&self) -> AppForm {
        self.form.get_value()
    }

    /// Trigger a reload of users
    pub fn reload(&self) {
        let users = self.users();
        spawn_local(async move {
            let _ = users.fetch_all().await;
        });
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
