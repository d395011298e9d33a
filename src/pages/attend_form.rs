//! Attend Conference Form Page
//!
//! Registers an attendee for a conference picked from the listing.

use leptos::*;

use crate::api;
use crate::api::client::{conference_choices, ConferenceChoice, NewAttendee};
use crate::state::global::GlobalState;

/// Attend-a-conference form page component
#[component]
pub fn AttendConferenceForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (selected, set_selected) = create_signal(String::new());
    let (choices, set_choices) = create_signal(Vec::<ConferenceChoice>::new());
    let (submitting, set_submitting) = create_signal(false);

    // Populate the conference dropdown on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_locations().await {
                Ok(locations) => set_choices.set(conference_choices(&locations)),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let choice = match selected.get().parse::<usize>() {
            Ok(index) => match choices.get().into_iter().nth(index) {
                Some(choice) => choice,
                None => {
                    state.show_error("Pick a conference first");
                    return;
                }
            },
            Err(_) => {
                state.show_error("Pick a conference first");
                return;
            }
        };

        let payload = NewAttendee {
            name: name.get(),
            email: email.get(),
        };
        if payload.name.is_empty() || payload.email.is_empty() {
            state.show_error("Name and email are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_attendee(&choice.location_id, &choice.conference_id, &payload).await {
                Ok(()) => {
                    state_clone.show_success("See you there!");
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_selected.set(String::new());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-lg mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Attend a conference"</h1>

            <form on:submit=on_submit class="space-y-4 bg-gray-800 rounded-xl p-6">
                // Conference
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Conference"</label>
                    <select
                        on:change=move |ev| set_selected.set(event_target_value(&ev))
                        prop:value=move || selected.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Choose a conference"</option>
                        {move || {
                            choices.get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, choice)| view! {
                                    <option value=index.to_string()>{choice.label.clone()}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                // Name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Your name"</label>
                    <input
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Email
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Submit
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Registering..." } else { "Attend" }}
                </button>
            </form>
        </div>
    }
}
