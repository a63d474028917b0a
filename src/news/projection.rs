//! Summary-card projection of aggregate articles.

use chrono::TimeZone;

use crate::api::AggregateArticle;
use crate::news::detail::format_short;

/// Author shown when an article lists no sources.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Date shown when an article carries no timestamps at all.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// What a summary card needs, derived from one [`AggregateArticle`].
///
/// Rebuilt on every render pass and never stored beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDisplayItem {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub date: String,
    /// Every tag except the primary category.
    pub tags: Vec<String>,
    pub event_id: Option<String>,
}

impl ListDisplayItem {
    /// Project an article using the local timezone for the date.
    pub fn from_article(article: &AggregateArticle) -> Self {
        Self::from_article_in(article, &chrono::Local)
    }

    pub fn from_article_in<Tz: TimeZone>(article: &AggregateArticle, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let author = article
            .sources
            .first()
            .map(|source| source.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let date = article
            .effective_latest_update()
            .map(|ts| format_short(ts, tz))
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());

        Self {
            title: article.title.clone(),
            excerpt: article.description.clone(),
            image: article.image_url.clone(),
            author,
            date,
            tags: article.tags.iter().skip(1).cloned().collect(),
            event_id: article.event_id.clone(),
        }
    }
}

/// Project a whole batch, keeping service order.
pub fn project_batch(batch: &[AggregateArticle]) -> Vec<ListDisplayItem> {
    batch.iter().map(ListDisplayItem::from_article).collect()
}

/// Tags that fit on a summary card plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTags<'a> {
    pub visible: &'a [String],
    pub overflow: usize,
}

impl<'a> CardTags<'a> {
    pub fn for_item(item: &'a ListDisplayItem, limit: usize) -> Self {
        let shown = item.tags.len().min(limit);
        Self {
            visible: &item.tags[..shown],
            overflow: item.tags.len() - shown,
        }
    }

    /// `"+N"` chip, only when something was left out.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}
