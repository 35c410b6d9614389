//! Query term validation
//!
//! A query term is validated once, at submission time, through
//! [`SearchQuery::parse`]. There is no per-keystroke validation surface; the
//! draft text a user is still typing never reaches this module.
//!
//! Validation errors carry the exact message shown inline next to the input
//! field. They are never logged and never reach the network layer.

use serde::Serialize;
use thiserror::Error;

/// Minimum number of characters a query term must contain
pub const MIN_TERM_CHARS: usize = 3;

/// Errors that can occur during query validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Search box can't be empty.")]
    Required,

    #[error("Please type at least 3 characters.")]
    TooShort,
}

/// A validated catalog query term
///
/// Can only be constructed through [`SearchQuery::parse`], so holding one is
/// proof the term passed validation. Surrounding whitespace is stripped; the
/// character minimum counts what remains.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Validate a raw input string
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Required`] for empty or whitespace-only input and
    /// [`QueryError::TooShort`] for trimmed input under [`MIN_TERM_CHARS`]
    /// characters.
    ///
    /// # Example
    ///
    /// ```
    /// use bookfind_core::{QueryError, SearchQuery};
    ///
    /// let query = SearchQuery::parse("dune").unwrap();
    /// assert_eq!(query.term(), "dune");
    ///
    /// assert_eq!(SearchQuery::parse("ab"), Err(QueryError::TooShort));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let term = raw.trim();

        if term.is_empty() {
            return Err(QueryError::Required);
        }

        if term.chars().count() < MIN_TERM_CHARS {
            return Err(QueryError::TooShort);
        }

        Ok(Self {
            term: term.to_string(),
        })
    }

    /// Get the validated term
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_term() {
        let query = SearchQuery::parse("dune").unwrap();
        assert_eq!(query.term(), "dune");
    }

    #[test]
    fn test_empty_is_required_error() {
        assert_eq!(SearchQuery::parse(""), Err(QueryError::Required));
    }

    #[test]
    fn test_whitespace_only_is_required_error() {
        assert_eq!(SearchQuery::parse("   \t"), Err(QueryError::Required));
    }

    #[test]
    fn test_two_chars_is_too_short() {
        assert_eq!(SearchQuery::parse("ab"), Err(QueryError::TooShort));
    }

    #[test]
    fn test_three_chars_is_valid() {
        assert!(SearchQuery::parse("abc").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let query = SearchQuery::parse("  moby dick  ").unwrap();
        assert_eq!(query.term(), "moby dick");
    }

    #[test]
    fn test_padded_short_term_is_too_short() {
        // "ab" padded to length 4 still has only 2 real characters
        assert_eq!(SearchQuery::parse(" ab "), Err(QueryError::TooShort));
    }

    #[test]
    fn test_multibyte_chars_are_counted_not_bytes() {
        assert!(SearchQuery::parse("日本語").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QueryError::Required.to_string(),
            "Search box can't be empty."
        );
        assert_eq!(
            QueryError::TooShort.to_string(),
            "Please type at least 3 characters."
        );
    }
}
