//! Attendees List Page
//!
//! Shows the attendee roster for a conference picked from the listing.

use leptos::*;

use crate::api;
use crate::api::client::{conference_choices, Attendee, ConferenceChoice};
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Attendees list page component
#[component]
pub fn AttendeesList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (selected, set_selected) = create_signal(String::new());
    let (choices, set_choices) = create_signal(Vec::<ConferenceChoice>::new());
    let (attendees, set_attendees) = create_signal(Vec::<Attendee>::new());
    let (fetching, set_fetching) = create_signal(false);

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

    let state_for_change = state.clone();
    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_selected.set(value.clone());

        let choice = match value.parse::<usize>() {
            Ok(index) => choices.get().into_iter().nth(index),
            Err(_) => None,
        };
        let Some(choice) = choice else {
            set_attendees.set(Vec::new());
            return;
        };

        set_fetching.set(true);

        let state = state_for_change.clone();
        spawn_local(async move {
            match api::fetch_attendees(&choice.location_id, &choice.conference_id).await {
                Ok(roster) => set_attendees.set(roster),
                Err(e) => state.show_error(&e),
            }
            set_fetching.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Attendees"</h1>

            // Conference picker
            <select
                on:change=on_change
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

            // Roster
            {move || {
                if fetching.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let roster = attendees.get();
                    if roster.is_empty() {
                        view! {
                            <p class="text-gray-400">"No attendees to show."</p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <table class="w-full text-left bg-gray-800 rounded-xl overflow-hidden">
                                <thead class="bg-gray-700 text-sm text-gray-300">
                                    <tr>
                                        <th class="px-4 py-3">"Name"</th>
                                        <th class="px-4 py-3">"Email"</th>
                                        <th class="px-4 py-3">"Company"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {roster.into_iter().map(|attendee| view! {
                                        <tr class="border-t border-gray-700">
                                            <td class="px-4 py-3">{attendee.name}</td>
                                            <td class="px-4 py-3 text-gray-400">{attendee.email}</td>
                                            <td class="px-4 py-3 text-gray-400">{attendee.company_name}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}
