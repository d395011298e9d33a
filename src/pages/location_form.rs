//! Location Form Page
//!
//! Registers a new location with the API. The state dropdown is populated
//! from the states endpoint; the backend resolves the location photo.

use leptos::*;

use crate::api;
use crate::api::client::{NewLocation, UsState};
use crate::state::global::GlobalState;

/// Location form page component
#[component]
pub fn LocationForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (room_count, set_room_count) = create_signal(String::new());
    let (us_state, set_us_state) = create_signal(String::new());
    let (states, set_states) = create_signal(Vec::<UsState>::new());
    let (submitting, set_submitting) = create_signal(false);

    // Populate the state dropdown on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_states().await {
                Ok(list) => set_states.set(list),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = NewLocation {
            name: name.get(),
            city: city.get(),
            room_count: match room_count.get().parse() {
                Ok(count) => count,
                Err(_) => {
                    state.show_error("Room count must be a whole number");
                    return;
                }
            },
            state: us_state.get(),
        };

        if payload.name.is_empty() || payload.city.is_empty() || payload.state.is_empty() {
            state.show_error("Name, city, and state are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_location(&payload).await {
                Ok(()) => {
                    state_clone.show_success("Location created");
                    set_name.set(String::new());
                    set_city.set(String::new());
                    set_room_count.set(String::new());
                    set_us_state.set(String::new());
                }
                Err(e) => {
                    // Keep the entered values so the user can retry
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-lg mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Create a new location"</h1>

            <form on:submit=on_submit class="space-y-4 bg-gray-800 rounded-xl p-6">
                // Name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        placeholder="Location name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // City
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"City"</label>
                    <input
                        type="text"
                        placeholder="City"
                        prop:value=move || city.get()
                        on:input=move |ev| set_city.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Room count
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Room count"</label>
                    <input
                        type="number"
                        min="1"
                        placeholder="e.g. 5"
                        prop:value=move || room_count.get()
                        on:input=move |ev| set_room_count.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // State
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"State"</label>
                    <select
                        on:change=move |ev| set_us_state.set(event_target_value(&ev))
                        prop:value=move || us_state.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="">"Choose a state"</option>
                        {move || {
                            states.get()
                                .into_iter()
                                .map(|us| view! {
                                    <option value=us.name.clone()>
                                        {format!("{} ({})", us.name, us.abbreviation)}
                                    </option>
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
