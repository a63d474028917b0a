//! Client side of the news aggregation service.
//!
//! - `types` - aggregate article model and the other response shapes
//! - `timestamp` - lenient timestamp decoding
//! - `client` - one-shot HTTP calls
//! - `error` - failure taxonomy

mod client;
mod error;
pub mod timestamp;
mod types;

pub use client::NewsClient;
pub use error::ApiError;
pub use types::{
    AggregateArticle, AggregationOutcome, EventUpdates, ServiceStats, SignificanceDistribution,
    SourceRef, UpdateEntry,
};
