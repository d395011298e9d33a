//! HTTP API Client
//!
//! Functions for communicating with the Conference GO! REST API, plus the
//! flatten step that turns the nested location/conference listing into the
//! render-ready view model.

use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use std::collections::BTreeMap;

use crate::state::global::{ConferenceView, LocationSummary};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("conference_go_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

/// Envelope of the locations listing endpoint.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LocationListResponse {
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// A venue as returned by the API, with its nested conferences.
///
/// Display fields fall back to empty when the backend omits them; a record
/// with no conferences parses to an empty list.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture_url: String,
    #[serde(default)]
    pub conferences: Vec<Conference>,
}

/// A conference as returned by the API, still nested under its location.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Conference {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub starts: DateTime<Utc>,
    pub ends: DateTime<Utc>,
}

/// An attendee row from the conference roster endpoint.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Attendee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_name: String,
}

#[derive(Debug, serde::Deserialize)]
struct AttendeeListResponse {
    #[serde(default)]
    attendees: Vec<Attendee>,
}

#[derive(Debug, serde::Deserialize)]
struct StatesResponse {
    // BTreeMap keeps the dropdown alphabetical regardless of wire order
    #[serde(default)]
    states: BTreeMap<String, String>,
}

/// A US state option for the location form.
#[derive(Debug, Clone, PartialEq)]
pub struct UsState {
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    detail: String,
}

// ============ Request Payloads ============

#[derive(Debug, Clone, serde::Serialize)]
pub struct NewLocation {
    pub name: String,
    pub city: String,
    pub room_count: u32,
    /// Full state name; the backend resolves the abbreviation and photo.
    pub state: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NewConference {
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`
    pub starts: String,
    /// Calendar date, `YYYY-MM-DD`
    pub ends: String,
    pub description: String,
    pub max_presentations: u32,
    pub max_attendees: u32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NewAttendee {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NewPresentation {
    pub presenter_name: String,
    pub presenter_email: String,
    pub title: String,
    pub synopsis: String,
}

// ============ Listing Transformation ============

/// Flatten the nested location/conference listing into render order.
///
/// Location-major: locations keep their response order and conferences keep
/// their order within each location. Each record carries a copy of its
/// parent location's display fields, so the flattened list stands on its
/// own. The output length is always the sum of conference counts.
pub fn flatten_locations(locations: Vec<Location>) -> Vec<ConferenceView> {
    locations
        .into_iter()
        .flat_map(|location| {
            let summary = LocationSummary {
                name: location.name,
                picture_url: location.picture_url,
            };
            location
                .conferences
                .into_iter()
                .map(move |conference| ConferenceView {
                    id: conference.id,
                    name: conference.name,
                    description: conference.description,
                    starts: conference.starts,
                    ends: conference.ends,
                    location: summary.clone(),
                })
        })
        .collect()
}

/// Pick the next listing state after a fetch attempt.
///
/// A failed fetch never touches what is already held: the previous model is
/// kept as-is, which on first load means an empty list. No retry, no error
/// surfaced to the page.
pub fn reconcile_listing(
    previous: Vec<ConferenceView>,
    fetched: Result<Vec<ConferenceView>, String>,
) -> Vec<ConferenceView> {
    match fetched {
        Ok(next) => next,
        Err(_) => previous,
    }
}

/// One selectable conference plus the ids that address its nested
/// attendee/presentation endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceChoice {
    pub location_id: String,
    pub conference_id: String,
    pub label: String,
}

/// Selectable conferences for the form dropdowns, in listing order.
pub fn conference_choices(locations: &[Location]) -> Vec<ConferenceChoice> {
    locations
        .iter()
        .flat_map(|location| {
            location
                .conferences
                .iter()
                .map(|conference| ConferenceChoice {
                    location_id: location.id.clone(),
                    conference_id: conference.id.clone(),
                    label: format!("{} ({})", conference.name, location.name),
                })
        })
        .collect()
}

// ============ API Functions ============

/// Fetch the locations listing
pub async fn fetch_locations() -> Result<Vec<Location>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/locations/", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    let result: LocationListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.locations)
}

/// Fetch the flattened conference listing
pub async fn fetch_conferences() -> Result<Vec<ConferenceView>, String> {
    let locations = fetch_locations().await?;
    Ok(flatten_locations(locations))
}

/// Fetch the US states for the location form
pub async fn fetch_states() -> Result<Vec<UsState>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/states/", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    let result: StatesResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result
        .states
        .into_iter()
        .map(|(name, abbreviation)| UsState { name, abbreviation })
        .collect())
}

/// Fetch the attendee roster for a conference
pub async fn fetch_attendees(
    location_id: &str,
    conference_id: &str,
) -> Result<Vec<Attendee>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!(
        "{}/locations/{}/conferences/{}/attendees/",
        api_base, location_id, conference_id
    ))
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    let result: AttendeeListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.attendees)
}

/// Create a new location
pub async fn create_location(location: &NewLocation) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/locations/", api_base))
        .json(location)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    Ok(())
}

/// Create a new conference at a location
pub async fn create_conference(
    location_id: &str,
    conference: &NewConference,
) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/locations/{}/conferences/", api_base, location_id))
        .json(conference)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    Ok(())
}

/// Register an attendee for a conference
pub async fn create_attendee(
    location_id: &str,
    conference_id: &str,
    attendee: &NewAttendee,
) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!(
        "{}/locations/{}/conferences/{}/attendees/",
        api_base, location_id, conference_id
    ))
    .json(attendee)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    Ok(())
}

/// Submit a presentation proposal for a conference
pub async fn create_presentation(
    location_id: &str,
    conference_id: &str,
    presentation: &NewPresentation,
) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!(
        "{}/locations/{}/conferences/{}/presentations/",
        api_base, location_id, conference_id
    ))
    .json(presentation)
    .map_err(|e| format!("Request build error: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            detail: "Unknown error".to_string(),
        });
        return Err(error.detail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_listing(json: &str) -> LocationListResponse {
        serde_json::from_str(json).expect("listing should parse")
    }

    fn sample_listing() -> LocationListResponse {
        parse_listing(
            r#"{
                "locations": [
                    {
                        "id": "loc-1",
                        "name": "Hall A",
                        "picture_url": "/a.png",
                        "conferences": [
                            {
                                "id": "conf-1",
                                "name": "RustConf",
                                "description": "All about Rust",
                                "starts": "2024-03-01T00:00:00Z",
                                "ends": "2024-03-03T00:00:00Z"
                            },
                            {
                                "id": "conf-2",
                                "name": "WasmCon",
                                "description": "WebAssembly everywhere",
                                "starts": "2024-05-10T00:00:00Z",
                                "ends": "2024-05-12T00:00:00Z"
                            }
                        ]
                    },
                    {
                        "id": "loc-2",
                        "name": "Hall B",
                        "picture_url": "/b.png",
                        "conferences": []
                    },
                    {
                        "id": "loc-3",
                        "name": "Hall C",
                        "picture_url": "/c.png",
                        "conferences": [
                            {
                                "id": "conf-3",
                                "name": "ServerlessDays",
                                "description": "Functions as a service",
                                "starts": "2024-09-20T00:00:00Z",
                                "ends": "2024-09-21T00:00:00Z"
                            }
                        ]
                    }
                ]
            }"#,
        )
    }

    #[test]
    fn test_flatten_empty_collection() {
        let listing = parse_listing(r#"{"locations":[]}"#);
        assert!(flatten_locations(listing.locations).is_empty());
    }

    #[test]
    fn test_flatten_length_is_total_conference_count() {
        let listing = sample_listing();
        let total: usize = listing
            .locations
            .iter()
            .map(|location| location.conferences.len())
            .sum();

        let flattened = flatten_locations(listing.locations);
        assert_eq!(flattened.len(), total);
        assert_eq!(flattened.len(), 3);
    }

    #[test]
    fn test_flatten_is_location_major_order() {
        let flattened = flatten_locations(sample_listing().locations);
        let ids: Vec<&str> = flattened.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["conf-1", "conf-2", "conf-3"]);
    }

    #[test]
    fn test_flatten_copies_parent_location_fields() {
        let flattened = flatten_locations(sample_listing().locations);

        assert_eq!(flattened[0].location.name, "Hall A");
        assert_eq!(flattened[0].location.picture_url, "/a.png");
        assert_eq!(flattened[1].location.name, "Hall A");
        assert_eq!(flattened[1].location.picture_url, "/a.png");
        assert_eq!(flattened[2].location.name, "Hall C");
    }

    #[test]
    fn test_flatten_same_input_twice_same_output() {
        let listing = sample_listing();
        let first = flatten_locations(listing.locations.clone());
        let second = flatten_locations(listing.locations);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reconcile_keeps_previous_model_on_failure() {
        let previous = flatten_locations(sample_listing().locations);

        let next = reconcile_listing(previous.clone(), Err("Network error: timeout".to_string()));
        assert_eq!(next, previous);

        // First load: the previous model is empty and stays empty
        let first_load = reconcile_listing(Vec::new(), Err("Parse error: bad body".to_string()));
        assert!(first_load.is_empty());
    }

    #[test]
    fn test_reconcile_replaces_model_on_success() {
        let previous = flatten_locations(sample_listing().locations);
        let next = reconcile_listing(previous, Ok(Vec::new()));
        assert!(next.is_empty());
    }

    #[test]
    fn test_location_with_missing_fields_parses_to_defaults() {
        let listing = parse_listing(r#"{"locations":[{"id":"loc-9","name":"Annex"}]}"#);

        assert_eq!(listing.locations.len(), 1);
        assert_eq!(listing.locations[0].picture_url, "");
        assert!(listing.locations[0].conferences.is_empty());

        // A pictureless location still flattens; the card emits an empty src
        let flattened = flatten_locations(listing.locations);
        assert!(flattened.is_empty());
    }

    #[test]
    fn test_states_payload_parses_alphabetical() {
        let response: StatesResponse = serde_json::from_str(
            r#"{"states":{"Texas":"TX","Alabama":"AL","New York":"NY"}}"#,
        )
        .expect("states should parse");

        let names: Vec<&String> = response.states.keys().collect();
        assert_eq!(names, vec!["Alabama", "New York", "Texas"]);
        assert_eq!(response.states["New York"], "NY");
    }

    #[test]
    fn test_conference_choices_pair_ids_with_labels() {
        let listing = sample_listing();
        let choices = conference_choices(&listing.locations);

        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].location_id, "loc-1");
        assert_eq!(choices[0].conference_id, "conf-1");
        assert_eq!(choices[0].label, "RustConf (Hall A)");
        assert_eq!(choices[2].location_id, "loc-3");
        assert_eq!(choices[2].conference_id, "conf-3");
    }
}
