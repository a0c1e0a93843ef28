//! caselaw - Caselaw Access Project case search client.
//!
//! Builds a case search request for a term, sends it, and decodes the nested
//! case records into typed structs.
//!
//! # Example
//!
//! ```no_run
//! use caselaw::{CaselawClient, ClientConfig};
//!
//! # async fn example() -> Result<(), caselaw::Error> {
//! let client = CaselawClient::new(ClientConfig::default())?;
//! let mut page = client.search("privacy").await?;
//!
//! loop {
//!     for case in &page.results {
//!         println!("{} ({})", case.name_abbreviation, case.decision_date);
//!     }
//!     let Some(next) = page.next.take() else {
//!         break;
//!     };
//!     page = client.fetch_page(&next).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export primary types at crate root for convenience
pub use client::CaselawClient;
pub use config::ClientConfig;
pub use error::Error;
pub use types::{
    Analysis, ApiUrl, Citation, CitesTo, Court, Jurisdiction, PageLink, Pagerank, Record,
    Reporter, SearchResponse, Volume,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
