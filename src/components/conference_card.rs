//! Conference Card Component
//!
//! Displays a single flattened conference record.

use leptos::*;

use crate::state::global::ConferenceView;

/// Conference card component
///
/// Image, title, location subtitle, description, and a footer with the
/// start and end dates as calendar dates. The image is emitted even when
/// the location has no picture URL; there is no fallback image.
#[component]
pub fn ConferenceCard(conference: ConferenceView) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl shadow overflow-hidden border border-gray-700 hover:border-gray-600 transition-colors">
            <img src=conference.location.picture_url.clone() alt="" class="w-full h-40 object-cover" />

            <div class="p-4">
                <h5 class="text-lg font-semibold">{conference.name.clone()}</h5>
                <h6 class="text-sm text-gray-400 mb-2">{conference.location.name.clone()}</h6>
                <p class="text-gray-300 text-sm">{conference.description.clone()}</p>
            </div>

            <div class="px-4 py-3 bg-gray-700/50 border-t border-gray-700 text-sm text-gray-300">
                {conference.starts_label()} " - " {conference.ends_label()}
            </div>
        </div>
    }
}
