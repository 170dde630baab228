//! Typed errors for the dispatch boundary
//!
//! The resolver is total and has no error kind. The only failure in this
//! crate is a dispatch whose navigation or side-effect setup throws; it
//! is caught at the dispatch boundary, surfaced as an error toast, and
//! returned to the caller as [`DispatchError`]. It never reaches the
//! resolver or the chat transcript.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Navigation to a portal surface failed
    #[error("navigation to {route} failed: {reason}")]
    Navigation { route: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_error_names_route_and_reason() {
        let err = DispatchError::Navigation {
            route: "/portal/documents".to_string(),
            reason: "browser unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "navigation to /portal/documents failed: browser unavailable"
        );
    }
}
