//! Dashboard: the authenticated landing route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sidebar::visible_menu;
use crate::state::session::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user()
            .map(|identity| format!("Welcome back, {}", identity.display_name()))
            .unwrap_or_default()
    };
    // Dashboard itself is the first menu entry.
    let shortcuts = move || {
        visible_menu(auth.get().user())
            .into_iter()
            .skip(1)
            .map(|item| view! { <A href=item.path attr:class="dashboard__card">{item.title}</A> })
            .collect_view()
    };

    view! {
        <section class="dashboard">
            <h2 class="dashboard__greeting">{greeting}</h2>
            <div class="dashboard__shortcuts">{shortcuts}</div>
        </section>
    }
}
