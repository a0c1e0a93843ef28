//! Client configuration.

use crate::endpoints::DEFAULT_ENDPOINT;
use crate::error::Error;
use crate::types::ApiUrl;

/// Settings a [`CaselawClient`](crate::CaselawClient) is built from.
///
/// Nothing here is read from the process environment; callers that want
/// environment overrides resolve them before constructing the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Case search endpoint that query parameters are appended to.
    pub endpoint: ApiUrl,
    /// `User-Agent` sent by the built-in HTTP client.
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration pointing at a different endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid [`ApiUrl`].
    pub fn with_endpoint(endpoint: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            endpoint: ApiUrl::new(endpoint)?,
            ..Self::default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: concat!("bitcrook/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// DEFAULT_ENDPOINT is a constant; `default_endpoint_is_valid` pins it.
fn default_endpoint() -> ApiUrl {
    ApiUrl::new(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid ApiUrl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_case_law() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint.as_str(), "https://api.case.law/v1/cases/");
        assert!(config.user_agent.starts_with("bitcrook/"));
    }

    #[test]
    fn default_endpoint_is_valid() {
        let endpoint = ApiUrl::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(endpoint.as_url().scheme(), "https");
        assert_eq!(endpoint.as_url().query(), None);
        assert_eq!(endpoint, default_endpoint());
    }

    #[test]
    fn with_endpoint_validates() {
        let config = ClientConfig::with_endpoint("http://127.0.0.1:9000/v1/cases/").unwrap();
        assert_eq!(config.endpoint.host(), Some("127.0.0.1"));
        assert!(ClientConfig::with_endpoint("not a url").is_err());
    }
}
