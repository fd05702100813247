//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session store over browser storage, projects it into the
//! `RwSignal<AuthState>` every component reads, and restores it once the app
//! has hydrated. Until then every guarded route shows a loading indicator, so
//! a signed-in user is never flashed the sign-in form.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::layout::AdminLayout;
use crate::components::logout_overlay::LogoutOverlay;
use crate::config::ApiConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, section::SectionPage};
use crate::routes::history::NavHistory;
use crate::state::session::{AuthState, SessionStore};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::StorageSet;

/// Non-reactive services shared through context.
///
/// These hold `Rc` handles, so they live in local arena storage rather than
/// in signals.
#[derive(Clone, Debug)]
pub struct Services {
    pub session: SessionStore,
    pub history: NavHistory,
    pub api: HttpAuthApi,
}

pub type ServicesHandle = StoredValue<Services, LocalStorage>;

impl Services {
    pub fn new(storage: StorageSet, api: HttpAuthApi) -> Self {
        Self {
            history: NavHistory::new(storage.scratch.clone()),
            session: SessionStore::new(storage),
            api,
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    let services = Services::new(StorageSet::browser(), HttpAuthApi::new(ApiConfig::from_build_env()));
    services.session.subscribe(move |state| auth.set(state.clone()));
    let services: ServicesHandle = StoredValue::new_local(services);

    provide_context(auth);
    provide_context(ui);
    provide_context(services);

    // Effects only run in the browser, after hydration, so the first client
    // render matches the server's loading shell.
    Effect::new(move || {
        services.with_value(|s| s.session.restore());
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ride-admin.css"/>
        <Title text="Admin"/>

        <Router>
            <Routes fallback=|| view! { <Guarded><AdminLayout><NotFoundPage/></AdminLayout></Guarded> }>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                <Route path=StaticSegment("") view=|| view! { <Guarded><AdminLayout><DashboardPage/></AdminLayout></Guarded> }/>
                <Route path=StaticSegment("riders") view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }/>
                <Route
                    path=(StaticSegment("riders"), ParamSegment("id"))
                    view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }
                />
                <Route path=StaticSegment("customers") view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }/>
                <Route
                    path=(StaticSegment("customers"), ParamSegment("id"))
                    view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }
                />
                <Route
                    path=StaticSegment("vehicle-type-rates")
                    view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }
                />
                <Route
                    path=(StaticSegment("vehicle-type-rates"), StaticSegment("add"))
                    view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }
                />
                <Route path=StaticSegment("settings") view=|| view! { <Guarded><AdminLayout><SectionPage/></AdminLayout></Guarded> }/>
            </Routes>
            <LogoutOverlay/>
        </Router>
    }
}
