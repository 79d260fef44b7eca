//! UI Components
//!
//! Leptos components of the user page.

mod confirm_dialog;
mod new_user_form;
mod toast_stack;
mod user_card;
mod user_list_view;

pub use confirm_dialog::ConfirmDialog;
pub use new_user_form::NewUserForm;
pub use toast_stack::ToastStack;
pub use user_card::UserCard;
pub use user_list_view::UserListView;
