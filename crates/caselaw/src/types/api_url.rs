//! API endpoint URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated case search endpoint URL.
///
/// Network endpoints must use HTTPS. Plain HTTP is accepted only for
/// loopback hosts so a local stub server can stand in for the real API.
///
/// # Example
///
/// ```
/// use caselaw::ApiUrl;
///
/// let api = ApiUrl::new("https://api.case.law/v1/cases/").unwrap();
/// assert_eq!(api.host(), Some("api.case.law"));
///
/// assert!(ApiUrl::new("http://api.case.law/v1/cases/").is_err());
/// assert!(ApiUrl::new("http://127.0.0.1:8080/v1/cases/").is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new endpoint URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or is not an acceptable
    /// endpoint.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::Endpoint {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_loopback(url)) {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Query parameters are owned by the client.
        if url.query().is_some() {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must not carry a query string".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(h)) => h == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://api.case.law/v1/cases/").unwrap();
        assert_eq!(api.host(), Some("api.case.law"));
        assert_eq!(api.as_str(), "https://api.case.law/v1/cases/");
    }

    #[test]
    fn valid_localhost_http() {
        assert!(ApiUrl::new("http://localhost:2583/v1/cases/").is_ok());
        assert!(ApiUrl::new("http://127.0.0.1:2583/v1/cases/").is_ok());
        assert!(ApiUrl::new("http://[::1]:2583/v1/cases/").is_ok());
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://api.case.law/v1/cases/").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/v1/cases/").is_err());
    }

    #[test]
    fn invalid_non_http_scheme() {
        let err = ApiUrl::new("file:///tmp/cases").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Endpoint { .. })
        ));
    }

    #[test]
    fn rejects_query_string() {
        assert!(ApiUrl::new("https://api.case.law/v1/cases/?page_size=100").is_err());
    }

    #[test]
    fn deserializes_with_validation() {
        let api: ApiUrl = serde_json::from_str("\"https://api.case.law/v1/cases/\"").unwrap();
        assert_eq!(api.host(), Some("api.case.law"));
        assert!(serde_json::from_str::<ApiUrl>("\"ftp://api.case.law\"").is_err());
    }
}
