//! Conference Form Page
//!
//! Schedules a new conference at an existing location.

use leptos::*;

use crate::api;
use crate::api::client::{Location, NewConference};
use crate::state::global::GlobalState;

/// Conference form page component
#[component]
pub fn ConferenceForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (starts, set_starts) = create_signal(String::new());
    let (ends, set_ends) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (max_presentations, set_max_presentations) = create_signal(String::new());
    let (max_attendees, set_max_attendees) = create_signal(String::new());
    let (location_id, set_location_id) = create_signal(String::new());
    let (locations, set_locations) = create_signal(Vec::<Location>::new());
    let (submitting, set_submitting) = create_signal(false);

    // Populate the location dropdown on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_locations().await {
                Ok(list) => set_locations.set(list),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let location = location_id.get();
        if location.is_empty() {
            state.show_error("Pick a location first");
            return;
        }

        let payload = NewConference {
            name: name.get(),
            starts: starts.get(),
            ends: ends.get(),
            description: description.get(),
            max_presentations: match max_presentations.get().parse() {
                Ok(count) => count,
                Err(_) => {
                    state.show_error("Max presentations must be a whole number");
                    return;
                }
            },
            max_attendees: match max_attendees.get().parse() {
                Ok(count) => count,
                Err(_) => {
                    state.show_error("Max attendees must be a whole number");
                    return;
                }
            },
        };

        if payload.name.is_empty() || payload.starts.is_empty() || payload.ends.is_empty() {
            state.show_error("Name, start date, and end date are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_conference(&location, &payload).await {
                Ok(()) => {
                    state_clone.show_success("Conference created");
                    set_name.set(String::new());
                    set_starts.set(String::new());
                    set_ends.set(String::new());
                    set_description.set(String::new());
                    set_max_presentations.set(String::new());
                    set_max_attendees.set(String::new());
                    set_location_id.set(String::new());
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
            <h1 class="text-3xl font-bold mb-6">"Create a new conference"</h1>

            <form on:submit=on_submit class="space-y-4 bg-gray-800 rounded-xl p-6">
                // Name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        placeholder="Conference name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Dates
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Starts"</label>
                        <input
                            type="date"
                            prop:value=move || starts.get()
                            on:input=move |ev| set_starts.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Ends"</label>
                        <input
                            type="date"
                            prop:value=move || ends.get()
                            on:input=move |ev| set_ends.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                // Description
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                    <textarea
                        rows="4"
                        placeholder="What is this conference about?"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Capacity
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Max presentations"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || max_presentations.get()
                            on:input=move |ev| set_max_presentations.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Max attendees"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || max_attendees.get()
                            on:input=move |ev| set_max_attendees.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                // Location
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Location"</label>
                    <select
                        on:change=move |ev| set_location_id.set(event_target_value(&ev))
                        prop:value=move || location_id.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Choose a location"</option>
                        {move || {
                            locations.get()
                                .into_iter()
                                .map(|location| view! {
                                    <option value=location.id.clone()>{location.name.clone()}</option>
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                // Submit
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Creating..." } else { "Create" }}
                </button>
            </form>
        </div>
    }
}
