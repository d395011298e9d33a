//! Conference GO! API Layer
//!
//! HTTP client for the Conference GO! REST backend.
//!
//! # Endpoints
//!
//! - `GET /api/locations/` - nested location/conference listing
//! - `GET /api/states/` - US states for the location form
//! - `POST /api/locations/` - create a location
//! - `POST /api/locations/{loc}/conferences/` - create a conference
//! - `GET /api/locations/{loc}/conferences/{conf}/attendees/` - roster
//! - `POST /api/locations/{loc}/conferences/{conf}/attendees/` - attend
//! - `POST /api/locations/{loc}/conferences/{conf}/presentations/` - submit

pub mod client;

pub use client::*;
