//! New User Form Component
//!
//! Toggleable form for creating users, validated as the user types.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::store::AppStateStoreFields;
use crate::validation::Field;

/// Toggle button plus the create form
#[component]
pub fn NewUserForm() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let visible = move || store.form().with(|f| f.visible);
    let submitting = move || store.form().with(|f| f.submitting);

    let create_user = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ctx.form();
        spawn_local(async move {
            let _ = form.submit().await;
        });
    };

    view! {
        <div class="create-panel">
            <button class="toggle-form-btn" on:click=move |_| ctx.form().toggle_visibility()>
                {move || store.form().with(|f| f.toggle_label())}
            </button>

            <Show when=visible>
                <form class="new-user-form" novalidate=true on:submit=create_user>
                    <FormField field=Field::Name label="Name" />
                    <FormField field=Field::Age label="Age" />
                    <FormField field=Field::Email label="Email" />

                    <button type="submit" class="submit-btn" disabled=submitting>
                        "Add"
                    </button>
                </form>
            </Show>
        </div>
    }
}

/// Labelled input bound to one create-form field
#[component]
fn FormField(field: Field, label: &'static str) -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let input_id = format!("new-user-{}", field.as_str());

    view! {
        <div class="form-field">
            <label for=input_id.clone() class="field-label">{label}</label>
            <input
                id=input_id
                type=field.input_type()
                inputmode=field.input_mode()
                class="field-input"
                prop:value=move || store.form().with(|f| f.fields.get(field).to_string())
                on:input=move |ev| ctx.form().set_field(field, event_target_value(&ev))
            />
            {move || {
                store
                    .form()
                    .with(|f| f.errors.message(field))
                    .map(|msg| view! { <p class="field-error">{msg}</p> })
            }}
        </div>
    }
}
