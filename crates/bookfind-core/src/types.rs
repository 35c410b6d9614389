//! Shared types for the search-request lifecycle
//!
//! These types cross the boundary between the transport layer and whatever
//! presents the results: the user-facing request banner, the opaque results
//! payload, and the receipt handed back for each dispatched request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The single user-facing message covering all network-failure classifications
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message carried by the banner after a successful request
pub const SUCCESS_MESSAGE: &str = "Success.";

/// User-facing request-state banner
///
/// Replaced wholesale on each submission attempt and on each response or
/// error. `status` is true only when there is an error to show; the message
/// accompanying a success or a cleared banner is never rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RequestNotice {
    pub status: bool,
    pub message: String,
}

impl RequestNotice {
    /// Banner state at the start of a submission attempt
    pub fn clear() -> Self {
        Self::default()
    }

    /// Banner state after a successful request
    pub fn success() -> Self {
        Self {
            status: false,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Banner state after any failed request
    ///
    /// All failure classifications collapse to this one generic message; the
    /// distinction between causes lives in the logs.
    pub fn failure() -> Self {
        Self {
            status: true,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// Whether the banner should be rendered
    pub fn is_visible(&self) -> bool {
        self.status
    }
}

/// Raw payload returned by the upstream catalog
///
/// Passed through unmodified; this workspace does not parse or validate its
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults(pub serde_json::Value);

impl SearchResults {
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Receipt for a dispatched search request
///
/// Returned to the submitter so log lines and events can be correlated with
/// the dispatch that caused them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchReceipt {
    pub request_id: Uuid,
    pub generation: u64,
    pub issued_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clear_banner_is_invisible() {
        let notice = RequestNotice::clear();
        assert!(!notice.is_visible());
        assert_eq!(notice.message, "");
    }

    #[test]
    fn test_success_banner_is_invisible() {
        let notice = RequestNotice::success();
        assert!(!notice.is_visible());
        assert_eq!(notice.message, "Success.");
    }

    #[test]
    fn test_failure_banner() {
        let notice = RequestNotice::failure();
        assert!(notice.is_visible());
        assert_eq!(notice.message, "Something went wrong. Please try again.");
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_value(RequestNotice::failure()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": true,
                "message": "Something went wrong. Please try again.",
            })
        );
    }

    #[test]
    fn test_results_pass_through_unmodified() {
        let body = serde_json::json!({"numFound": 1, "docs": [{"title": "Dune"}]});
        let results = SearchResults(body.clone());
        assert_eq!(results.into_inner(), body);
    }
}
