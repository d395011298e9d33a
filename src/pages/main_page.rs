//! Main Page
//!
//! The aggregated conference listing. Fetches the nested location listing
//! once on mount, flattens it, and renders one card per conference.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{ConferenceCard, Loading};
use crate::routes;
use crate::state::global::GlobalState;

/// Main page component
#[component]
pub fn MainPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let conferences = state.conferences;
    let loading = state.loading;

    // Fetch the listing on mount: exactly one request per mount, no polling
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let fetched = api::fetch_conferences().await;
            if let Err(e) = &fetched {
                // Fail soft: the listing keeps its previous contents
                web_sys::console::error_1(
                    &format!("Failed to fetch conferences: {}", e).into(),
                );
            }
            state.conferences.set(api::reconcile_listing(
                state.conferences.get_untracked(),
                fetched,
            ));

            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Hero banner
            <div class="text-center bg-gray-800 rounded-xl px-6 py-12">
                <h1 class="text-4xl font-bold mb-4">"Conference GO!"</h1>
                <p class="text-gray-400 max-w-xl mx-auto mb-6">
                    "The only resource you'll ever need to plan and run your in-person or \
                     virtual conference for thousands of attendees and presenters."
                </p>
                <A
                    href=routes::ATTENDEE_NEW
                    class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    "Attend a conference"
                </A>
            </div>

            // Conference listing
            <section>
                <h2 class="text-2xl font-semibold mb-4">"Upcoming conferences"</h2>

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                <For
                                    each=move || conferences.get()
                                    key=|conference| conference.id.clone()
                                    children=move |conference| {
                                        view! { <ConferenceCard conference=conference /> }
                                    }
                                />
                            </div>
                        }
                        .into_view()
                    }
                }}
            </section>
        </div>
    }
}
