//! Search session lifecycle
//!
//! The session owns the draft input a user is editing, validates it on
//! submission, dispatches at most one request per submission, and reports
//! state transitions over an event channel. Overlapping submissions are
//! allowed; a generation counter guarantees only the latest one publishes
//! its outcome.

use crate::client::CatalogClient;
use crate::error::SearchError;
use async_trait::async_trait;
use bookfind_core::{QueryError, RequestNotice, SearchQuery, SearchReceipt, SearchResults};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Transport seam between the session and the catalog
///
/// Implemented by [`CatalogClient`]; sessions under test are driven by a stub
/// instead of a live endpoint.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError>;
}

#[async_trait]
impl SearchBackend for CatalogClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError> {
        CatalogClient::search(self, query).await
    }
}

/// State transitions delivered to the presenter
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Pending-state transition: true at dispatch, false at resolution
    Loading(bool),

    /// Wholesale replacement of the request banner
    Notice(RequestNotice),

    /// Raw payload of a successful search, delivered exactly once
    Data(SearchResults),
}

/// Drives the submit/pending/resolve lifecycle of catalog searches
///
/// Created together with the receiver its events arrive on. The session
/// never blocks on a response: [`submit`](Self::submit) returns as soon as
/// the request is in flight.
pub struct SearchSession {
    backend: Arc<dyn SearchBackend>,
    events: UnboundedSender<SessionEvent>,
    generation: Arc<AtomicU64>,
    input: String,
}

impl SearchSession {
    /// Create a session and the receiver for its events
    pub fn new(backend: Arc<dyn SearchBackend>) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                backend,
                events,
                generation: Arc::new(AtomicU64::new(0)),
                input: String::new(),
            },
            rx,
        )
    }

    /// Replace the draft input
    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    /// Current draft input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validate the draft and, if it passes, dispatch one search
    ///
    /// On validation failure the error is returned for inline display: no
    /// events are emitted, nothing touches the network, and the draft is
    /// retained for correction.
    ///
    /// On success the prior banner is cleared, the pending flag is raised,
    /// the request is spawned, and the draft is reset immediately without
    /// awaiting the response. The returned receipt identifies the in-flight
    /// request.
    ///
    /// A response that resolves after a newer submission has been dispatched
    /// is dropped without publishing any events.
    ///
    /// Must be called from within a Tokio runtime; the request is spawned
    /// onto it.
    pub fn submit(&mut self) -> Result<SearchReceipt, QueryError> {
        let query = SearchQuery::parse(&self.input)?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let receipt = SearchReceipt {
            request_id: Uuid::new_v4(),
            generation,
            issued_at: Utc::now(),
        };

        // Prior banner goes away the moment a new attempt starts
        let _ = self.events.send(SessionEvent::Notice(RequestNotice::clear()));
        let _ = self.events.send(SessionEvent::Loading(true));

        tracing::debug!(
            request_id = %receipt.request_id,
            generation,
            term = query.term(),
            "dispatching search"
        );

        let backend = Arc::clone(&self.backend);
        let events = self.events.clone();
        let latest = Arc::clone(&self.generation);
        tokio::spawn(async move {
            let outcome = backend.search(&query).await;

            if latest.load(Ordering::SeqCst) != generation {
                // A newer submission owns the session state now
                tracing::debug!(generation, "dropping superseded response");
                return;
            }

            match outcome {
                Ok(results) => {
                    let _ = events.send(SessionEvent::Notice(RequestNotice::success()));
                    let _ = events.send(SessionEvent::Loading(false));
                    let _ = events.send(SessionEvent::Data(results));
                }
                Err(err) => {
                    err.log();
                    let _ = events.send(SessionEvent::Notice(err.notice()));
                    let _ = events.send(SessionEvent::Loading(false));
                }
            }
        });

        self.input.clear();
        Ok(receipt)
    }
}
