//! Presentation Form Page
//!
//! Submits a presentation proposal for a conference.

use leptos::*;

use crate::api;
use crate::api::client::{conference_choices, ConferenceChoice, NewPresentation};
use crate::state::global::GlobalState;

/// Presentation form page component
#[component]
pub fn PresentationForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (presenter_name, set_presenter_name) = create_signal(String::new());
    let (presenter_email, set_presenter_email) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (synopsis, set_synopsis) = create_signal(String::new());
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

        let payload = NewPresentation {
            presenter_name: presenter_name.get(),
            presenter_email: presenter_email.get(),
            title: title.get(),
            synopsis: synopsis.get(),
        };
        if payload.presenter_name.is_empty()
            || payload.presenter_email.is_empty()
            || payload.title.is_empty()
        {
            state.show_error("Presenter name, email, and title are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_presentation(&choice.location_id, &choice.conference_id, &payload)
                .await
            {
                Ok(()) => {
                    state_clone.show_success("Presentation submitted");
                    set_presenter_name.set(String::new());
                    set_presenter_email.set(String::new());
                    set_title.set(String::new());
                    set_synopsis.set(String::new());
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
            <h1 class="text-3xl font-bold mb-6">"Submit a presentation"</h1>

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

                // Presenter
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Presenter name"</label>
                        <input
                            type="text"
                            placeholder="Full name"
                            prop:value=move || presenter_name.get()
                            on:input=move |ev| set_presenter_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Presenter email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || presenter_email.get()
                            on:input=move |ev| set_presenter_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                </div>

                // Title
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        placeholder="Presentation title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Synopsis
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Synopsis"</label>
                    <textarea
                        rows="4"
                        placeholder="What will you talk about?"
                        prop:value=move || synopsis.get()
                        on:input=move |ev| set_synopsis.set(event_target_value(&ev))
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
                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
