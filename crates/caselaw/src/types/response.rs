//! Search response envelope.

use serde::{Deserialize, Serialize};

use super::de::{cursor, nullable};
use super::record::Record;

/// One page of case search results.
///
/// Each page is decoded fresh from a single response and owned by the
/// caller. The client never follows [`SearchResponse::next`] by itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total matches known to the API, usually more than one page holds.
    /// Zero when the API leaves it out.
    #[serde(default, deserialize_with = "nullable")]
    pub count: u64,

    /// URL of the following page, `None` on the last page.
    #[serde(default, deserialize_with = "cursor")]
    pub next: Option<String>,

    /// Link back to the prior page. The API does not commit to a type here.
    #[serde(default)]
    pub previous: Option<PageLink>,

    /// Matched cases in the order the API ranked them.
    #[serde(default, deserialize_with = "nullable")]
    pub results: Vec<Record>,
}

impl SearchResponse {
    /// Returns true if another page can be fetched with [`SearchResponse::next`].
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A pagination link of unconstrained type.
///
/// Strings are kept as URLs; anything else is retained as raw JSON so it can
/// be passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageLink {
    Url(String),
    Other(serde_json::Value),
}

impl PageLink {
    /// The link as a URL string, if the API sent one.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            PageLink::Url(url) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}
