//! Authenticated page chrome: sidebar, header, and content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only mounted inside a `Guarded` route that decided to render, which is
//! what makes it the right place to record navigation history.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::ServicesHandle;
use crate::components::sidebar::Sidebar;
use crate::routes::title_for;
use crate::state::session::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let services = expect_context::<ServicesHandle>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        services.with_value(|s| s.history.record(&path));
    });

    view! {
        <div class="admin-shell">
            <Sidebar/>
            <main class="admin-main" class:admin-main--wide=move || !ui.get().sidebar_expanded>
                <Header/>
                <div class="admin-content">{children()}</div>
            </main>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let services = expect_context::<ServicesHandle>();
    let location = use_location();
    let navigate = use_navigate();

    let title = move || title_for(&location.pathname.get());
    let user_name = move || auth.get().user().map(|identity| identity.display_name()).unwrap_or_default();

    let on_back = move |_| {
        let target = services.with_value(|s| s.history.back_target());
        navigate(&target, NavigateOptions::default());
    };

    let on_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_logout = move |_| {
        if auth.get_untracked().logging_out {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let (session, api) = services.with_value(|s| (s.session.clone(), s.api.clone()));
            leptos::task::spawn_local(async move {
                session.sign_out(&api).await;
            });
        }
    };

    view! {
        <header class="top-header">
            <div class="top-header__title">
                <button class="top-header__back" type="button" title="Back" on:click=on_back>
                    "\u{2039}"
                </button>
                <span class="page-title">{title}</span>
            </div>
            <div class="top-header__actions">
                <button class="theme-toggle" type="button" on:click=on_theme>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>
                <span class="top-header__user">{user_name}</span>
                <button
                    class="top-header__logout"
                    type="button"
                    disabled=move || auth.get().logging_out
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}
