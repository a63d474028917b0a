//! One-shot commands that print to stdout instead of opening the UI.

use std::fmt::Write as _;

use chrono::TimeZone;
use thiserror::Error;

use crate::api::{
    AggregateArticle, AggregationOutcome, ApiError, EventUpdates, NewsClient, ServiceStats,
};
use crate::news::{format_long, ordered_history, resolve, CardTags, DetailView, ListDisplayItem};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("No article titled \"{0}\" in the current batch")]
    NotFound(String),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

pub async fn list(client: &NewsClient, json: bool, max_tags: usize) -> Result<String, CommandError> {
    let batch = client.get_news().await?;
    if json {
        return Ok(serde_json::to_string_pretty(&batch)?);
    }
    Ok(format_list(&batch, max_tags, &chrono::Local))
}

pub async fn show(client: &NewsClient, title: &str) -> Result<String, CommandError> {
    let batch = client.get_news().await?;
    let article = resolve(&batch, title).ok_or_else(|| CommandError::NotFound(title.to_string()))?;
    Ok(DetailView::local(article).to_string())
}

pub async fn aggregate(client: &NewsClient) -> Result<String, CommandError> {
    let outcome = client.trigger_aggregation().await?;
    Ok(format_aggregation(&outcome)?)
}

pub async fn stats(client: &NewsClient) -> Result<String, CommandError> {
    Ok(format_stats(&client.get_stats().await?))
}

pub async fn updates(client: &NewsClient, event_id: &str) -> Result<String, CommandError> {
    let updates = client.get_event_updates(event_id).await?;
    Ok(format_event_updates(&updates, &chrono::Local))
}

/// One block per article: title, byline, card tags.
pub fn format_list<Tz: TimeZone>(batch: &[AggregateArticle], max_tags: usize, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if batch.is_empty() {
        return "No articles available\n".to_string();
    }

    let mut out = String::new();
    for article in batch {
        let item = ListDisplayItem::from_article_in(article, tz);
        let _ = writeln!(out, "{}", item.title);
        let _ = writeln!(out, "  {} · {}", item.author, item.date);

        let tags = CardTags::for_item(&item, max_tags);
        if !tags.visible.is_empty() {
            let mut line = tags
                .visible
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" ");
            if let Some(label) = tags.overflow_label() {
                line.push(' ');
                line.push_str(&label);
            }
            let _ = writeln!(out, "  {}", line);
        }
        out.push('\n');
    }
    out
}

/// The service message when it sent one, else the raw payload.
pub fn format_aggregation(outcome: &AggregationOutcome) -> Result<String, serde_json::Error> {
    if let Some(error) = outcome.error() {
        return Ok(format!("Aggregation failed: {}\n", error));
    }

    let mut out = String::new();
    match outcome.message() {
        Some(message) => {
            let _ = writeln!(out, "{}", message);
        }
        None => {
            let _ = writeln!(out, "{}", serde_json::to_string_pretty(outcome.raw())?);
            return Ok(out);
        }
    }
    if let Some(stats) = outcome.stats() {
        for (key, value) in stats {
            let _ = writeln!(out, "  {}: {}", key, value);
        }
    }
    Ok(out)
}

pub fn format_stats(stats: &ServiceStats) -> String {
    let dist = &stats.significance_distribution;
    format!(
        "Articles: {} ({} active)\nTags: {}\nSources: {}\nSignificance: {} high, {} medium, {} low\n",
        stats.total_articles,
        stats.active_articles,
        stats.total_tags,
        stats.total_sources,
        dist.high,
        dist.medium,
        dist.low,
    )
}

pub fn format_event_updates<Tz: TimeZone>(updates: &EventUpdates, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = format!("{}\n", updates.title);
    for entry in ordered_history(&updates.updates) {
        let _ = writeln!(out, "  {}", format_long(entry.date_time, tz));
        let _ = writeln!(out, "      {}", entry.description);
    }
    out
}
