//! Case search endpoint constants and query parameters.

use url::Url;

// ============================================================================
// Endpoint
// ============================================================================

/// Case search endpoint of the Caselaw Access Project API.
pub const DEFAULT_ENDPOINT: &str = "https://api.case.law/v1/cases/";

/// Records requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Result ordering requested from the API.
pub const ORDERING: &str = "relevance";

// ============================================================================
// Request Headers
// ============================================================================
//
// The API's content negotiation expects exactly these values.

/// `Allow` header value.
pub const ALLOW: &str = "GET, HEAD, OPTIONS";

/// `Content-Type` header value.
pub const CONTENT_TYPE: &str = "application/json";

/// `Vary` header value.
pub const VARY: &str = "Accept";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for a case search, in wire order.
#[derive(Debug)]
pub(crate) struct SearchQuery<'a> {
    pub page_size: u32,
    pub search: &'a str,
    pub ordering: &'a str,
}

impl<'a> SearchQuery<'a> {
    pub fn new(term: &'a str) -> Self {
        Self {
            page_size: PAGE_SIZE,
            search: term,
            ordering: ORDERING,
        }
    }

    /// Append the parameters to `url`, form-encoding each value.
    pub fn apply(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair("page_size", &self.page_size.to_string())
            .append_pair("search", self.search)
            .append_pair("ordering", self.ordering);
    }
}

/// Error body the API sends with non-success statuses.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub detail: Option<String>,
}
