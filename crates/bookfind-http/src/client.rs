//! Reqwest-based Open Library catalog client

use crate::error::SearchError;
use bookfind_core::{SearchQuery, SearchResults};
use reqwest::Client;
use std::time::Duration;

/// Default catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Fixed number of results requested per search
pub const PAGE_SIZE: u32 = 10;

/// Bound on how long a single request may take, response included
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

/// Catalog client for the Open Library search endpoint
///
/// # Example
///
/// ```ignore
/// use bookfind_core::SearchQuery;
/// use bookfind_http::CatalogClient;
///
/// let client = CatalogClient::default();
///
/// let query = SearchQuery::parse("dune")?;
/// let results = client.search(&query).await?;
/// ```
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client with the given base URL
    ///
    /// The base URL should not include a trailing slash. The client will
    /// append `/search.json` for search requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build().unwrap(),
            base_url: base_url.into(),
        }
    }

    /// Create a catalog client with custom settings
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one catalog search
    ///
    /// Sends `GET {base_url}/search.json?limit=10&q=<term>` and returns the
    /// raw response payload. Exactly one request goes out; there is no retry
    /// and no interpretation of the payload shape.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] classifying the failure: a non-2xx status, no
    /// response within the timeout, or a request that could not be sent.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, SearchError> {
        let url = format!("{}/search.json", self.base_url);

        tracing::debug!(term = query.term(), "dispatching catalog search");

        let limit = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.as_str()), ("q", query.term())])
            .send()
            .await
            .map_err(SearchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(SearchError::from_transport)?;

        // The payload is opaque; a non-JSON body is passed through as a string
        let value = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));

        Ok(SearchResults(value))
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
