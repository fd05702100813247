//! Guard wrapper applied to every routed view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Looks up the current path in the route table and carries out the pure
//! guard decision. Nothing is decided until the session store has restored;
//! a redirect decision never renders the wrapped content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loaders::LoadingSpinner;
use crate::routes::guard::{GuardDecision, guard};
use crate::state::session::AuthState;

#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    // `None` until restore completes.
    let decision = Memo::new(move |_| {
        let state = auth.get();
        if state.loading {
            return None;
        }
        Some(guard(&location.pathname.get(), state.is_present()))
    });

    move || match decision.get() {
        None => view! { <LoadingSpinner/> }.into_any(),
        Some(GuardDecision::Render) => children().into_any(),
        Some(GuardDecision::Redirect { to, replace }) => {
            let options = NavigateOptions { replace, ..NavigateOptions::default() };
            view! { <Redirect path=to options=options/> }.into_any()
        }
    }
}
