//! Types for the Gamma API.
//!
//! - [`request`]: one builder-style filter per endpoint, each with its query schema
//! - [`response`]: decoded entities ([`response::Event`], [`response::Market`], ...)
//!
//! ```
//! use polymarket_gamma_sdk::gamma::types::request::{EventsRequest, MarketsRequest};
//!
//! let events = EventsRequest::builder().build();
//! let markets = MarketsRequest::builder().limit(10).closed(false).build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Which related tags to include, by the state of the events they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum RelatedTagsStatus {
    Active,
    Closed,
    All,
    /// Value not known to this crate, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Kind of entity a comment thread hangs off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[non_exhaustive]
pub enum ParentEntityType {
    Event,
    Series,
    #[serde(rename = "market")]
    #[strum(serialize = "market")]
    Market,
    /// Value not known to this crate, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}
