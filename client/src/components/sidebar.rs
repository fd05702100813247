//! Navigation sidebar. Every section is listed for any signed-in identity;
//! permissions only gate opening individual records.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::identity::Identity;
use crate::state::session::AuthState;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub path: &'static str,
}

pub const MENU: &[MenuItem] = &[
    MenuItem { title: "Dashboard", path: "/" },
    MenuItem { title: "Riders", path: "/riders" },
    MenuItem { title: "Customers", path: "/customers" },
    MenuItem { title: "Vehicle Type Rates", path: "/vehicle-type-rates" },
    MenuItem { title: "Settings", path: "/settings" },
];

/// Menu entries shown to `identity`: the full menu, or nothing when signed out.
pub fn visible_menu(identity: Option<&Identity>) -> Vec<MenuItem> {
    if identity.is_none() {
        return Vec::new();
    }
    MENU.to_vec()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let items = move || {
        visible_menu(auth.get().user())
            .into_iter()
            .map(|item| {
                view! {
                    <A href=item.path attr:class="sidebar__link" attr:title=item.title>
                        {item.title}
                    </A>
                }
            })
            .collect_view()
    };
    let toggle = move |_| ui.update(|u| u.sidebar_expanded = !u.sidebar_expanded);

    view! {
        <aside class="sidebar" class:sidebar--expanded=move || ui.get().sidebar_expanded>
            <button class="sidebar__toggle" type="button" title="Toggle sidebar" on:click=toggle>
                {move || if ui.get().sidebar_expanded { "\u{2039}" } else { "\u{203a}" }}
            </button>
            <nav class="sidebar__nav">{items}</nav>
        </aside>
    }
}
