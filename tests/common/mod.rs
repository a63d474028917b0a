//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use newsdesk::api::{AggregateArticle, NewsClient};
use newsdesk::config::{Config, ServiceConfig};
use newsdesk::ui::app::App;
use serde_json::{json, Value};
use std::net::TcpListener;

/// A port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Client with short timeouts pointed at `base_url`.
pub fn client_for(base_url: &str) -> NewsClient {
    let service = ServiceConfig {
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ServiceConfig::default()
    };
    NewsClient::new(base_url, &service).expect("valid base url")
}

/// Article payload in the service's wire shape.
pub fn article_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{} summary", title),
        "imageUrl": "",
        "sources": [{"name": "Wire", "url": "https://wire.example", "citation": ""}],
        "url": format!("https://news.example/{}", title.to_lowercase().replace(' ', "-")),
        "latestUpdateDateTime": "2024-01-02T00:00:00Z",
        "updateHistory": [{"dateTime": "2024-01-02T00:00:00Z", "description": "published"}],
        "tags": ["General", "Top"]
    })
}

pub fn news_body(titles: &[&str]) -> Value {
    json!({ "articles": titles.iter().map(|t| article_json(t)).collect::<Vec<_>>() })
}

pub fn articles(titles: &[&str]) -> Vec<AggregateArticle> {
    titles
        .iter()
        .map(|t| serde_json::from_value(article_json(t)).unwrap())
        .collect()
}

/// App with the decorative background off and no runtime attached.
pub fn make_app() -> App {
    let mut config = Config::default();
    config.display.background = false;
    App::new(&config, "http://localhost:10000")
}
