//! Case search data model.
//!
//! Response types mirror the API's JSON field names and decode leniently;
//! [`ApiUrl`] enforces endpoint rules at construction time.

mod api_url;
mod de;
mod record;
mod response;

pub use api_url::ApiUrl;
pub use record::{
    Analysis, Citation, CitesTo, Court, Jurisdiction, Pagerank, Record, Reporter, Volume,
};
pub use response::{PageLink, SearchResponse};
