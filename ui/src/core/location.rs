//! Current route location as seen by the navbar.
//!
//! The `ui` crate does not know any platform's `Route` enum, so the current
//! path comes from one of two places (first wins):
//! 1. a `NavLocation` provided through Dioxus context, or
//! 2. a path reader registered by the platform crate via [`register_location`].
//!
//! Without either, the navbar renders as if on the root path.
//!
//! Platform wiring:
//! ```ignore
//! fn current_path() -> String {
//!     use_route::<Route>().to_string()
//! }
//! ui::core::location::register_location(current_path);
//! ```
//! The reader runs during the navbar's render, so hooks inside it subscribe
//! the navbar to route changes.

use once_cell::sync::OnceCell;

use crate::logging::{log_duplicate_registration, log_location};

/// Current path plus its top-level segment (`/docs/intro` -> `docs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLocation {
    path: String,
    segment: Option<String>,
}

impl NavLocation {
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            segment: None,
        }
    }

    /// Build from a path or full route string. Query and fragment are
    /// stripped, an empty path becomes `/`.
    pub fn from_path(raw: &str) -> Self {
        let path = raw
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default()
            .trim();
        let path = match path {
            "" => "/".to_string(),
            p if p.starts_with('/') => p.to_string(),
            p => format!("/{p}"),
        };
        let segment = path
            .split('/')
            .find(|part| !part.is_empty())
            .map(str::to_string);
        Self { path, segment }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Whether a nav link to `href` is highlighted here.
    ///
    /// Raw prefix test against `/<segment>`, so `/about` also highlights
    /// `/about-us`. Nothing is highlighted on the root path.
    pub fn highlights(&self, href: &str) -> bool {
        match &self.segment {
            Some(segment) => href.starts_with(&format!("/{segment}")),
            None => false,
        }
    }
}

impl Default for NavLocation {
    fn default() -> Self {
        Self::root()
    }
}

static LOCATION_SOURCE: OnceCell<fn() -> String> = OnceCell::new();

/// Register the platform's current-path reader. Only the first call counts.
pub fn register_location(reader: fn() -> String) {
    if LOCATION_SOURCE.set(reader).is_err() {
        log_duplicate_registration("location");
    }
}

/// Location from the registered reader, if any.
pub fn registered_location() -> Option<NavLocation> {
    LOCATION_SOURCE.get().map(|read| {
        let location = NavLocation::from_path(&read());
        log_location(location.path(), location.segment());
        location
    })
}
