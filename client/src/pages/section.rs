//! Record section pages (riders, customers, rate cards, settings).
//!
//! Table, detail, and form rendering for these sections is driven by the
//! backend; this page frames the section and names the selected record.
//! Sections with detail routes offer a record lookup, which only opens the
//! record when the signed-in identity may view it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};

use crate::routes::{DETAIL_SECTIONS, can_open_detail, detail_link, detail_permission, title_for};
use crate::state::session::AuthState;

const NO_ACCESS: &str = "You do not have access to this record.";

#[component]
pub fn SectionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let params = use_params_map();
    let navigate = use_navigate();

    let lookup = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let title = move || title_for(&location.pathname.get());
    let record_id = move || params.get().get("id");
    let has_details = move || DETAIL_SECTIONS.contains(&location.pathname.get().trim_end_matches('/'));

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let section = location.pathname.get_untracked();
        let Some(link) = detail_link(&section, &lookup.get_untracked()) else {
            return;
        };
        let permission = detail_permission(&section);
        if can_open_detail(auth.get_untracked().user(), Some(&permission)) {
            message.set(String::new());
            navigate(&link, NavigateOptions::default());
        } else {
            message.set(NO_ACCESS.to_owned());
        }
    };

    view! {
        <section class="section-page">
            <h2 class="section-page__title">{title}</h2>
            <Show when=move || record_id().is_some()>
                <p class="section-page__record">"Record #" {move || record_id().unwrap_or_default()}</p>
            </Show>
            <Show when=move || record_id().is_none() && has_details()>
                <form class="section-page__lookup" on:submit=on_open.clone()>
                    <input
                        class="section-page__lookup-input"
                        type="text"
                        placeholder="Record ID"
                        prop:value=move || lookup.get()
                        on:input=move |ev| lookup.set(event_target_value(&ev))
                    />
                    <button class="section-page__lookup-button" type="submit">"Open"</button>
                    <Show when=move || !message.get().is_empty()>
                        <p class="section-page__message">{move || message.get()}</p>
                    </Show>
                </form>
            </Show>
        </section>
    }
}
