//! Route Table
//!
//! Every path the client-side router knows about, in one place. The router
//! in [`crate::app`] and the links in [`crate::components::nav`] both read
//! from this table, so a path literal never appears anywhere else.

/// Main page: the aggregated conference listing.
pub const MAIN: &str = "/";

/// Form for registering a new location.
pub const LOCATION_NEW: &str = "/locations/new";

/// Form for scheduling a new conference at a location.
pub const CONFERENCE_NEW: &str = "/conferences/new";

/// Attendee roster for a chosen conference.
pub const ATTENDEES: &str = "/attendees";

/// Form for attending a conference.
pub const ATTENDEE_NEW: &str = "/attendees/new";

/// Form for submitting a presentation.
pub const PRESENTATION_NEW: &str = "/presentations/new";

/// Navigation entries in display order: (path, label).
pub const NAV_LINKS: &[(&str, &str)] = &[
    (MAIN, "Conferences"),
    (LOCATION_NEW, "New Location"),
    (CONFERENCE_NEW, "New Conference"),
    (ATTENDEES, "Attendees"),
    (ATTENDEE_NEW, "Attend"),
    (PRESENTATION_NEW, "New Presentation"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_cover_distinct_paths() {
        let mut paths: Vec<&str> = NAV_LINKS.iter().map(|(path, _)| *path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), NAV_LINKS.len());
    }

    #[test]
    fn test_all_paths_are_absolute() {
        for (path, _) in NAV_LINKS {
            assert!(path.starts_with('/'), "{path} is not absolute");
        }
    }
}
