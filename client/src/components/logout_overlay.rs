//! Blocking overlay while sign-out is in flight.

use leptos::prelude::*;

use crate::state::session::AuthState;

#[component]
pub fn LogoutOverlay() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || auth.get().logging_out>
            <div class="logout-overlay" role="alertdialog" aria-modal="true">
                <div class="logout-overlay__card">
                    <div class="loading-spinner"></div>
                    <h2>"Logging Out"</h2>
                    <p>"Please wait while we securely log you out..."</p>
                </div>
            </div>
        </Show>
    }
}
