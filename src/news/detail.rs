//! Detail view model: history ordering and date formatting.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use crate::api::{AggregateArticle, SourceRef, UpdateEntry};

const LONG_FORMAT: &str = "%B %-d, %Y at %I:%M %p";
const SHORT_FORMAT: &str = "%-m/%-d/%Y";

/// Update history, most recent first.
///
/// Always re-sorted: the service's array order is not trusted to be
/// chronological. Entries with equal timestamps keep their relative order.
pub fn ordered_history(history: &[UpdateEntry]) -> Vec<UpdateEntry> {
    let mut ordered = history.to_vec();
    // sort_by is stable
    ordered.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    ordered
}

/// `January 2, 2024 at 03:04 PM`
pub fn format_long<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    ts.with_timezone(tz).format(LONG_FORMAT).to_string()
}

/// `1/2/2024`
pub fn format_short<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    ts.with_timezone(tz).format(SHORT_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLine {
    pub when: String,
    pub description: String,
}

/// Everything the detail view shows for one article, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub sources: Vec<SourceRef>,
    pub history: Vec<HistoryLine>,
    pub last_updated: Option<String>,
    pub url: Option<String>,
    pub significance: Option<f64>,
}

impl DetailView {
    pub fn build<Tz: TimeZone>(article: &AggregateArticle, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let history = ordered_history(&article.update_history)
            .into_iter()
            .map(|entry| HistoryLine {
                when: format_long(entry.date_time, tz),
                description: entry.description,
            })
            .collect();

        Self {
            title: article.title.clone(),
            tags: article.tags.clone(),
            description: article.description.clone(),
            sources: article.sources.clone(),
            history,
            last_updated: article
                .effective_latest_update()
                .map(|ts| format_long(ts, tz)),
            url: article.canonical_url().map(str::to_string),
            significance: article.significance_score,
        }
    }

    /// Build with the local timezone.
    pub fn local(article: &AggregateArticle) -> Self {
        Self::build(article, &chrono::Local)
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.tags.is_empty() {
            writeln!(f, "Tags: {}", self.tags.join(", "))?;
        }
        if let Some(score) = self.significance {
            writeln!(f, "Significance: {:.1}", score)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if !self.sources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sources:")?;
            for source in &self.sources {
                if source.url.is_empty() {
                    writeln!(f, "  - {}", source.name)?;
                } else {
                    writeln!(f, "  - {} <{}>", source.name, source.url)?;
                }
                if !source.citation.is_empty() {
                    writeln!(f, "      {}", source.citation)?;
                }
            }
        }

        if !self.history.is_empty() {
            writeln!(f)?;
            writeln!(f, "Update History:")?;
            for line in &self.history {
                writeln!(f, "  {}", line.when)?;
                writeln!(f, "      {}", line.description)?;
            }
        }

        if let Some(last) = &self.last_updated {
            writeln!(f)?;
            writeln!(f, "Last Updated: {}", last)?;
        }
        if let Some(url) = &self.url {
            writeln!(f, "Read original: {}", url)?;
        }
        Ok(())
    }
}
