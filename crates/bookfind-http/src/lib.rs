//! # Bookfind HTTP Transport
//!
//! HTTP transport and search-session lifecycle for the bookfind catalog
//! search client.
//!
//! This crate provides:
//! - A reqwest-based client for the Open Library search endpoint
//! - Three-way classification of request failures, collapsed to one generic
//!   user-facing banner
//! - A session driving the submit/pending/resolve lifecycle over an event
//!   channel
//!
//! ## Client Example
//!
//! ```ignore
//! use bookfind_core::SearchQuery;
//! use bookfind_http::CatalogClient;
//!
//! let client = CatalogClient::default();
//! let query = SearchQuery::parse("dune")?;
//! let results = client.search(&query).await?;
//! ```
//!
//! ## Session Example
//!
//! ```ignore
//! use bookfind_http::{CatalogClient, SearchSession, SessionEvent};
//! use std::sync::Arc;
//!
//! let (mut session, mut events) = SearchSession::new(Arc::new(CatalogClient::default()));
//! session.set_input("dune");
//! let receipt = session.submit()?;
//!
//! while let Some(event) = events.recv().await {
//!     match event {
//!         SessionEvent::Loading(pending) => { /* toggle a spinner */ }
//!         SessionEvent::Notice(notice) => { /* replace the banner */ }
//!         SessionEvent::Data(results) => { /* hand the payload onward */ }
//!     }
//! }
//! ```

mod client;
mod error;
mod session;

pub use client::{CatalogClient, DEFAULT_BASE_URL, PAGE_SIZE, REQUEST_TIMEOUT};
pub use error::SearchError;
pub use session::{SearchBackend, SearchSession, SessionEvent};
