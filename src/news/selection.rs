//! Resolve a summary card back to its full record.

use crate::api::AggregateArticle;

/// Find the article a card was projected from.
///
/// Titles are the lookup key: linear scan, exact match, first match wins.
/// `None` means the card is stale relative to `batch`.
pub fn resolve<'a>(batch: &'a [AggregateArticle], title: &str) -> Option<&'a AggregateArticle> {
    batch.iter().find(|article| article.title == title)
}
