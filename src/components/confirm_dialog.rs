//! Confirm Dialog Component
//!
//! Modal yes/no prompt driven by `DialogConfirmer`.

use leptos::prelude::*;

use crate::context::use_app;

/// Shows the pending prompt, if any
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirmer = use_app().confirmer;

    view! {
        {move || confirmer.prompt().map(|prompt| view! {
            <div class="modal-backdrop" on:click=move |_| confirmer.answer(false)>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 class="modal-title">{prompt.title}</h2>
                    <p class="modal-text">{prompt.text}</p>
                    <div class="modal-actions">
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                confirmer.answer(true);
                            }
                        >
                            {prompt.confirm_label}
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                confirmer.answer(false);
                            }
                        >
                            {prompt.cancel_label}
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
