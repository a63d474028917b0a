use crate::api::AggregateArticle;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// A fetch completed with a batch.
    Loaded { articles: Vec<AggregateArticle> },

    /// A fetch failed.
    Failed { message: String },
}

impl Intent for FeedIntent {}
