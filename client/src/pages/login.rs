//! Sign-in page: email + password against the admin backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::app::ServicesHandle;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::SessionError;

#[cfg(any(test, feature = "hydrate"))]
const GENERIC_FAILURE: &str = "Sign in failed. Please try again.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Message shown for a failed sign-in exchange. Only backend rejections carry
/// their own wording.
#[cfg(any(test, feature = "hydrate"))]
fn api_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message, .. } => message.clone(),
        _ => GENERIC_FAILURE.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn session_error_message(err: &SessionError) -> String {
    format!("{GENERIC_FAILURE} ({err})")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let (session, api) = services.with_value(|s| (s.session.clone(), s.api.clone()));
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match api.sign_in(&email_value, &password_value).await {
                    Ok(record) => session.sign_in_record(record).map_err(|e| session_error_message(&e)),
                    Err(e) => Err(api_error_message(&e)),
                };
                match outcome {
                    Ok(()) => navigate(crate::routes::HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() }),
                    Err(message) => {
                        log::info!("sign in rejected: {message}");
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, services);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h4 class="login-card__title">"Sign In"</h4>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">
                        <span>"Email"</span>
                        <input
                            id="email"
                            class="login-input"
                            type="email"
                            placeholder="Enter Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label" for="password">
                        <span>"Password"</span>
                        <div class="login-password">
                            <input
                                id="password"
                                class="login-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="***********"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="login-password__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
