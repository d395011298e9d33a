//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the flattened
//! conference view model the main page renders from.

use chrono::{DateTime, Local, TimeZone, Utc};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Flattened conference listing, location-major order. Recomputed per
    /// fetch; left untouched when a fetch fails.
    pub conferences: RwSignal<Vec<ConferenceView>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Display fields copied from a conference's parent location.
///
/// A copy, not a back-reference: the flattened listing stays valid on its
/// own once the nested response is gone.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSummary {
    pub name: String,
    pub picture_url: String,
}

/// One render-ready conference record from the flattened listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ConferenceView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub starts: DateTime<Utc>,
    pub ends: DateTime<Utc>,
    pub location: LocationSummary,
}

impl ConferenceView {
    /// Start date as a calendar-date label in the browser's timezone.
    pub fn starts_label(&self) -> String {
        date_label(self.starts.with_timezone(&Local))
    }

    /// End date as a calendar-date label in the browser's timezone.
    pub fn ends_label(&self) -> String {
        date_label(self.ends.with_timezone(&Local))
    }
}

/// Format a timestamp as a calendar date, no time-of-day component.
pub fn date_label<Tz: TimeZone>(date: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        conferences: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_date_label_is_calendar_date_only() {
        let starts = utc("2024-03-01T00:00:00Z");
        let ends = utc("2024-03-03T00:00:00Z");

        assert_eq!(date_label(starts), "March 1, 2024");
        assert_eq!(date_label(ends), "March 3, 2024");
    }

    #[test]
    fn test_date_label_has_no_time_component() {
        let label = date_label(utc("2024-11-20T17:45:09Z"));
        assert_eq!(label, "November 20, 2024");
        assert!(!label.contains(':'));
    }

    #[test]
    fn test_date_label_single_digit_day_unpadded() {
        assert_eq!(date_label(utc("2025-07-09T12:00:00Z")), "July 9, 2025");
    }
}
