//! User Card Component
//!
//! One user, shown read-only or as an inline edit form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::User;
use crate::store::AppStateStoreFields;
use crate::validation::Field;

/// A single user card
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let id = StoredValue::new(user.id.clone());

    let session = Memo::new(move |_| {
        let id = id.get_value();
        store.sessions().with(|s| s.get(&id).cloned().unwrap_or_default())
    });
    let editing = move || session.with(|s| s.is_editing());
    let saving = move || session.with(|s| s.is_saving());
    let deleting = move || store.deleting().with(|d| d.contains(&id.get_value()));

    let begin_edit = move |_| {
        ctx.users().begin_edit(&id.get_value());
    };
    let cancel_edit = move |_| ctx.users().cancel_edit(&id.get_value());
    let save = move |_| {
        let users = ctx.users();
        let id = id.get_value();
        spawn_local(async move {
            let _ = users.save_edit(&id).await;
        });
    };
    let delete = move |_| {
        let users = ctx.users();
        let confirmer = ctx.confirmer;
        let id = id.get_value();
        spawn_local(async move {
            let _ = users.delete(&id, &confirmer).await;
        });
    };

    let name = user.name.clone();
    let age = user.age;
    let email = user.email.clone();

    view! {
        <div class="user-card">
            <Show
                when=editing
                fallback=move || view! {
                    <div class="user-details">
                        <p class="user-name">{name.clone()}</p>
                        <p class="user-meta">"Age: " {age}</p>
                        <p class="user-meta">"Email: " {email.clone()}</p>
                    </div>
                }
            >
                <div class="user-details editing">
                    <DraftInput user=user.clone() field=Field::Name />
                    <DraftInput user=user.clone() field=Field::Age />
                    <DraftInput user=user.clone() field=Field::Email />
                </div>
            </Show>

            <div class="card-actions">
                <Show
                    when=editing
                    fallback=move || view! {
                        <button class="edit-btn" on:click=begin_edit>"Edit"</button>
                        <button class="delete-btn" disabled=deleting on:click=delete>"Delete"</button>
                    }
                >
                    <button class="save-btn" disabled=saving on:click=save>
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="cancel-btn" disabled=saving on:click=cancel_edit>"Cancel"</button>
                </Show>
            </div>
        </div>
    }
}

/// One field of an edit draft
#[component]
fn DraftInput(user: User, field: Field) -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let id = StoredValue::new(user.id.clone());
    let user = StoredValue::new(user);

    let value = move || {
        let id = id.get_value();
        store.sessions().with(|s| {
            let session = s.get(&id).cloned().unwrap_or_default();
            user.with_value(|u| session.draft_or(u).get(field).to_string())
        })
    };
    let error = move || {
        let id = id.get_value();
        store
            .sessions()
            .with(|s| s.get(&id).and_then(|session| session.errors()).and_then(|e| e.message(field)))
    };
    let saving = move || {
        let id = id.get_value();
        store.sessions().with(|s| s.get(&id).is_some_and(|session| session.is_saving()))
    };

    view! {
        <div class="field">
            <input
                type=field.input_type()
                inputmode=field.input_mode()
                class="field-input"
                disabled=saving
                aria-label=field.as_str()
                prop:value=value
                on:input=move |ev| ctx.users().edit_field(&id.get_value(), field, event_target_value(&ev))
            />
            {move || error().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}
