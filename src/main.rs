//! Conference GO!
//!
//! Single-page frontend for the Conference GO! planning service, built with
//! Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Conference GO! REST API over HTTP: the main
//! page aggregates the nested location/conference listing into a flat list
//! of conference cards, and the form pages post new locations, conferences,
//! attendees, and presentations back to the API.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
