//! Request error classification
//!
//! A failed search has one of three underlying causes: the server answered
//! with a non-2xx status, the request went out but nothing came back, or the
//! request never left. Each is logged with its distinguishing detail; all
//! three collapse to the same generic user-facing banner.

use bookfind_core::RequestNotice;
use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure of a single catalog request
#[derive(Debug, Error)]
pub enum SearchError {
    /// A response arrived carrying a non-2xx status
    #[error("catalog returned {status}")]
    Status { status: StatusCode, body: String },

    /// The request was sent but no response arrived (network failure or the
    /// request timeout, which surfaces here rather than as a distinct error)
    #[error("no response from catalog: {0}")]
    NoResponse(#[source] reqwest::Error),

    /// The request could not be constructed or sent at all
    #[error("could not send catalog request: {0}")]
    Send(#[source] reqwest::Error),
}

impl SearchError {
    /// Classify a transport-level failure reported by the HTTP layer
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Send(err)
        } else {
            Self::NoResponse(err)
        }
    }

    /// Log the distinguishing diagnostic detail for this failure
    ///
    /// The distinction between causes exists for diagnosis only; users see
    /// the one banner from [`notice`](Self::notice) in every case.
    pub fn log(&self) {
        match self {
            Self::Status { status, body } => {
                tracing::warn!(status = %status, body = %body, "catalog responded with an error status");
            }
            Self::NoResponse(err) => {
                tracing::warn!(
                    error = %err,
                    timeout = err.is_timeout(),
                    connect = err.is_connect(),
                    "request sent but no response arrived"
                );
            }
            Self::Send(err) => {
                tracing::error!(error = %err, "request could not be sent");
            }
        }
    }

    /// The banner shown to users for this failure
    pub fn notice(&self) -> RequestNotice {
        RequestNotice::failure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = SearchError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "upstream exploded".to_string(),
        };
        assert_eq!(err.to_string(), "catalog returned 500 Internal Server Error");
    }

    #[test]
    fn test_every_cause_maps_to_the_generic_banner() {
        let err = SearchError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert_eq!(err.notice(), RequestNotice::failure());
        assert_eq!(
            err.notice().message,
            "Something went wrong. Please try again."
        );
    }
}
