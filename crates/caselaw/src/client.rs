//! Case search HTTP client.

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::{debug, instrument, trace};
use url::Url;

use crate::config::ClientConfig;
use crate::endpoints::{self, ApiErrorResponse, SearchQuery};
use crate::error::{BodyReadError, DecodeError, Error, InvalidInputError, TransportError};
use crate::types::SearchResponse;

/// Client for the case search API.
///
/// Every call is a single GET followed by a full body read and decode. The
/// client keeps no per-call state, so it can be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct CaselawClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CaselawClient {
    /// Create a client with its own HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client on top of a caller-configured transport.
    ///
    /// Use this to add default headers, proxies or timeouts; the client
    /// itself imposes none.
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The exact URL [`CaselawClient::search`] requests for `term`.
    ///
    /// The term is always a single form-encoded `search` value.
    ///
    /// ```
    /// use caselaw::{CaselawClient, ClientConfig};
    ///
    /// let client = CaselawClient::new(ClientConfig::default()).unwrap();
    /// assert_eq!(
    ///     client.search_url("fourth amendment").as_str(),
    ///     "https://api.case.law/v1/cases/?page_size=10&search=fourth+amendment&ordering=relevance"
    /// );
    /// ```
    pub fn search_url(&self, term: &str) -> Url {
        let mut url = self.config.endpoint.as_url().clone();
        SearchQuery::new(term).apply(&mut url);
        url
    }

    /// Search cases matching `term`, returning the first page.
    ///
    /// The term is passed through untouched; an empty or odd term is for the
    /// API to reject.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    pub async fn search(&self, term: &str) -> Result<SearchResponse, Error> {
        let url = self.search_url(term);
        debug!(%url, "case search");

        self.get(url).await
    }

    /// Fetch the page a pagination cursor points at.
    ///
    /// `cursor` is a `next` or `previous` URL from an earlier response and is
    /// requested as-is.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Cursor`] without sending anything if the
    /// cursor is not an absolute HTTP(S) URL.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    pub async fn fetch_page(&self, cursor: &str) -> Result<SearchResponse, Error> {
        let url = parse_cursor(cursor)?;
        debug!(%url, "case search page");

        self.get(url).await
    }

    async fn get(&self, url: Url) -> Result<SearchResponse, Error> {
        let response = self
            .client
            .get(url)
            .headers(request_headers())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle a search response, reading and decoding the body or error.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<SearchResponse, Error> {
        let status = response.status();
        trace!(status = %status, "case search response");

        if !status.is_success() {
            return Err(self.parse_error_response(response).await.into());
        }

        let body = response.bytes().await.map_err(BodyReadError::new)?;
        trace!(bytes = body.len(), "read response body");

        let decoded = serde_json::from_slice(&body).map_err(|e| DecodeError::new(e, &body))?;
        Ok(decoded)
    }

    /// Turn a non-success response into a status error.
    async fn parse_error_response(&self, response: reqwest::Response) -> TransportError {
        let status = response.status().as_u16();

        let detail = match response.json::<ApiErrorResponse>().await {
            Ok(body) => body.detail,
            Err(_) => None,
        };

        TransportError::Status { status, detail }
    }
}

/// The fixed header set every case search carries.
fn request_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ALLOW, HeaderValue::from_static(endpoints::ALLOW));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(endpoints::CONTENT_TYPE),
    );
    headers.insert(header::VARY, HeaderValue::from_static(endpoints::VARY));
    headers
}

fn parse_cursor(cursor: &str) -> Result<Url, InvalidInputError> {
    let invalid = |reason: &str| InvalidInputError::Cursor {
        value: cursor.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(cursor).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("must be an HTTP(S) URL"));
    }
    if url.host_str().is_none() {
        return Err(invalid("must have a host"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CaselawClient {
        CaselawClient::new(ClientConfig::default()).unwrap()
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn search_url_has_fixed_parameters() {
        let url = client().search_url("privacy");
        assert_eq!(
            url.as_str(),
            "https://api.case.law/v1/cases/?page_size=10&search=privacy&ordering=relevance"
        );
    }

    #[test]
    fn search_term_cannot_inject_parameters() {
        let url = client().search_url("smith & jones&page_size=1000#frag");
        let pairs = query_pairs(&url);

        assert_eq!(
            pairs,
            vec![
                ("page_size".to_string(), "10".to_string()),
                (
                    "search".to_string(),
                    "smith & jones&page_size=1000#frag".to_string()
                ),
                ("ordering".to_string(), "relevance".to_string()),
            ]
        );
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn empty_term_is_passed_through() {
        let pairs = query_pairs(&client().search_url(""));
        assert_eq!(pairs[1], ("search".to_string(), String::new()));
    }

    #[test]
    fn search_url_follows_configured_endpoint() {
        let config = ClientConfig::with_endpoint("http://localhost:8000/v1/cases/").unwrap();
        let client = CaselawClient::new(config).unwrap();
        assert!(
            client
                .search_url("x")
                .as_str()
                .starts_with("http://localhost:8000/v1/cases/?page_size=10")
        );
    }

    #[test]
    fn request_headers_are_fixed() {
        let headers = request_headers();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers[header::ALLOW], "GET, HEAD, OPTIONS");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[header::VARY], "Accept");
    }

    #[test]
    fn cursor_must_be_http_url() {
        assert!(parse_cursor("https://api.case.law/v1/cases/?cursor=abc").is_ok());
        assert!(parse_cursor("cursor=abc").is_err());
        assert!(parse_cursor("ftp://api.case.law/v1/cases/").is_err());
    }

    #[tokio::test]
    async fn invalid_cursor_fails_before_request() {
        let err = client().fetch_page("not a cursor").await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Cursor { .. })
        ));
    }
}
