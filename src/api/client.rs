//! HTTP client for the news aggregation service.
//!
//! One request per call: no retry, no backoff. Callers decide what a
//! failure means for the page.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{AggregateArticle, AggregationOutcome, EventUpdates, ServiceStats};
use crate::config::{validate_base_url, ServiceConfig};

const NEWS_PATH: &str = "/api/news";
const AGGREGATE_PATH: &str = "/api/aggregate";
const STATS_PATH: &str = "/api/stats";

/// Client for the aggregation service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct NewsClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct NewsEnvelope {
    articles: Vec<serde_json::Value>,
}

impl NewsClient {
    /// Build a client for an already-resolved base URL.
    pub fn new(base_url: &str, service: &ServiceConfig) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        validate_base_url(&base_url).map_err(|_| ApiError::InvalidBaseUrl {
            url: base_url.clone(),
        })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(service.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(service.timeout_seconds)))
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self { client, base_url })
    }

    /// Build a client, resolving the base URL from override, env and config.
    pub fn from_config(service: &ServiceConfig, cli_override: Option<&str>) -> Result<Self, ApiError> {
        let base_url = service.resolve_base_url(cli_override);
        Self::new(&base_url, service)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current batch of aggregate articles.
    ///
    /// A body without a usable `articles` array yields an empty batch.
    /// Articles that fail to decode on their own are skipped.
    pub async fn get_news(&self) -> Result<Vec<AggregateArticle>, ApiError> {
        let response = self.send(self.client.get(self.url(NEWS_PATH))).await?;
        let body = read_body(response).await?;

        match serde_json::from_slice::<NewsEnvelope>(&body) {
            Ok(envelope) => {
                let batch = decode_batch(envelope.articles);
                tracing::debug!(count = batch.len(), "Fetched news batch");
                Ok(batch)
            }
            Err(e) => {
                tracing::warn!("Malformed news response, showing no articles: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Ask the service to refresh its aggregate.
    ///
    /// The response payload is kept opaque; a non-JSON body becomes `null`.
    pub async fn trigger_aggregation(&self) -> Result<AggregationOutcome, ApiError> {
        let request = self
            .client
            .post(self.url(AGGREGATE_PATH))
            .header(CONTENT_TYPE, "application/json");
        let response = self.send(request).await?;
        let body = read_body(response).await?;

        let raw = serde_json::from_slice(&body).unwrap_or_else(|e| {
            tracing::debug!("Aggregation response is not JSON: {}", e);
            serde_json::Value::Null
        });
        Ok(AggregationOutcome::new(raw))
    }

    /// Fetch service-wide statistics.
    pub async fn get_stats(&self) -> Result<ServiceStats, ApiError> {
        let response = self.send(self.client.get(self.url(STATS_PATH))).await?;
        decode_strict(response, "stats").await
    }

    /// Fetch the full update log for one event.
    ///
    /// The service reports unknown events as `{"error": ...}` with status 200.
    pub async fn get_event_updates(&self, event_id: &str) -> Result<EventUpdates, ApiError> {
        let mut url = self.url("/api/event");
        if let Ok(mut parsed) = reqwest::Url::parse(&url) {
            if let Ok(mut segments) = parsed.path_segments_mut() {
                segments.push(event_id).push("updates");
            }
            url = parsed.to_string();
        }

        let response = self.send(self.client.get(url)).await?;
        let body = read_body(response).await?;
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                context: "event updates",
                source,
            })?;

        if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
            return Err(ApiError::Service {
                message: message.to_string(),
            });
        }

        serde_json::from_value(value).map_err(|source| ApiError::Decode {
            context: "event updates",
            source,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| {
            tracing::warn!("Request to {} failed: {}", self.base_url, source);
            ApiError::Network { source }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %response.url(),
                "News service returned an error status"
            );
            return Err(ApiError::Request {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

/// Decode each article independently, in service order.
fn decode_batch(values: Vec<serde_json::Value>) -> Vec<AggregateArticle> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(article) => Some(article),
            Err(e) => {
                tracing::warn!(index, "Skipping undecodable article: {}", e);
                None
            }
        })
        .collect()
}

async fn read_body(response: Response) -> Result<Vec<u8>, ApiError> {
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|source| ApiError::Network { source })
}

async fn decode_strict<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, ApiError> {
    let body = read_body(response).await?;
    serde_json::from_slice(&body).map_err(|source| ApiError::Decode { context, source })
}
