//! Wire types exchanged with the aggregation service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// One deduplicated news story assembled from several sources.
///
/// Immutable once decoded. Field names follow the service's camelCase
/// JSON; extra fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateArticle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub url: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub latest_update_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_history: Vec<UpdateEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// A contributing publication behind an aggregate article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub citation: String,
}

/// One revision in an article's update log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntry {
    #[serde(with = "timestamp")]
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl AggregateArticle {
    /// Canonical link, if the service supplied one.
    pub fn canonical_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Primary category (the first tag).
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Latest moment this article changed.
    ///
    /// `latestUpdateDateTime` should equal the newest history entry, but the
    /// service does not guarantee it; the later of the two wins.
    pub fn effective_latest_update(&self) -> Option<DateTime<Utc>> {
        let history_max = self.update_history.iter().map(|u| u.date_time).max();
        match (self.latest_update_date_time, history_max) {
            (Some(declared), Some(observed)) => {
                if declared != observed {
                    tracing::debug!(
                        title = %self.title,
                        %declared,
                        %observed,
                        "latestUpdateDateTime disagrees with update history"
                    );
                }
                Some(declared.max(observed))
            }
            (declared, observed) => declared.or(observed),
        }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Aggregate statistics reported by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub total_articles: u64,
    pub active_articles: u64,
    pub total_tags: u64,
    pub total_sources: u64,
    pub significance_distribution: SignificanceDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceDistribution {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

/// Update log for one event, from `GET /api/event/{id}/updates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventUpdates {
    pub event_id: String,
    pub title: String,
    pub updates: Vec<UpdateEntry>,
}

/// Opaque result of `POST /api/aggregate`.
///
/// The body is not schema-checked. The accessors only peek at fields the
/// service is known to send so the CLI can print something useful.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationOutcome {
    raw: serde_json::Value,
}

impl AggregationOutcome {
    pub fn new(raw: serde_json::Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn message(&self) -> Option<&str> {
        self.raw.get("message").and_then(|v| v.as_str())
    }

    /// Error text the service reports with a 200 status.
    pub fn error(&self) -> Option<&str> {
        self.raw.get("error").and_then(|v| v.as_str())
    }

    pub fn stats(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.raw.get("stats").and_then(|v| v.as_object())
    }
}
