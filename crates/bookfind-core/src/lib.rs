//! # Bookfind Core
//!
//! Data model and query validation for the bookfind catalog search client.
//!
//! This crate provides:
//! - The validated [`SearchQuery`] type and its tagged validation errors
//! - The [`RequestNotice`] banner value surfaced to users
//! - Receipt and payload types shared by the transport layer
//!
//! ## Example
//!
//! ```rust,ignore
//! use bookfind_core::SearchQuery;
//!
//! // Validate a raw term before anything touches the network
//! let query = SearchQuery::parse("lord of the rings")?;
//! assert_eq!(query.term(), "lord of the rings");
//! ```

pub mod query;
pub mod types;

// Re-exports for convenience
pub use query::*;
pub use types::*;
