//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod conference_card;
pub mod loading;
pub mod nav;
pub mod toast;

pub use conference_card::ConferenceCard;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
