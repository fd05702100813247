//! Loading indicators.

use leptos::prelude::*;

/// Full-screen spinner shown while the session is being restored.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-spinner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
