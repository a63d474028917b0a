//! Summary projection and detail view over realistic service payloads.

use chrono::Utc;
use newsdesk::api::AggregateArticle;
use newsdesk::news::{CardTags, DetailView, ListDisplayItem, UNKNOWN_AUTHOR};
use serde_json::json;

fn decode(value: serde_json::Value) -> AggregateArticle {
    serde_json::from_value(value).unwrap()
}

fn multi_tag_article() -> AggregateArticle {
    decode(json!({
        "title": "A",
        "sources": [{"name": "X", "url": "https://x.example", "citation": ""}],
        "tags": ["Tech", "AI", "ML", "Cloud"],
        "updateHistory": [
            {"dateTime": "2024-01-02", "description": "d2"},
            {"dateTime": "2024-01-01", "description": "d1"}
        ]
    }))
}

#[test]
fn card_and_detail_for_a_multi_tag_article() {
    let article = multi_tag_article();

    let item = ListDisplayItem::from_article_in(&article, &Utc);
    assert_eq!(item.author, "X");
    let tags = CardTags::for_item(&item, 3);
    assert_eq!(tags.visible, ["AI", "ML", "Cloud"]);
    assert_eq!(tags.overflow_label(), None);

    let view = DetailView::build(&article, &Utc);
    let order: Vec<_> = view.history.iter().map(|h| h.description.as_str()).collect();
    assert_eq!(order, ["d2", "d1"]);
}

#[test]
fn history_is_sorted_even_when_service_sends_it_ascending() {
    let article = decode(json!({
        "title": "Rising",
        "updateHistory": [
            {"dateTime": "2024-01-01T00:00:00Z", "description": "first"},
            {"dateTime": "2024-01-03T00:00:00Z", "description": "third"},
            {"dateTime": "2024-01-02T00:00:00Z", "description": "second"}
        ]
    }));

    let view = DetailView::build(&article, &Utc);
    let order: Vec<_> = view.history.iter().map(|h| h.description.as_str()).collect();
    assert_eq!(order, ["third", "second", "first"]);
    assert_eq!(view.last_updated.as_deref(), Some("January 3, 2024 at 12:00 AM"));
}

#[test]
fn equal_timestamps_keep_service_order() {
    let article = decode(json!({
        "title": "Tie",
        "updateHistory": [
            {"dateTime": "2024-01-01T00:00:00Z", "description": "alpha"},
            {"dateTime": "2024-01-01T00:00:00Z", "description": "beta"}
        ]
    }));

    let view = DetailView::build(&article, &Utc);
    let order: Vec<_> = view.history.iter().map(|h| h.description.as_str()).collect();
    assert_eq!(order, ["alpha", "beta"]);
}

#[test]
fn article_without_sources() {
    let article = decode(json!({
        "title": "Orphan",
        "sources": [],
        "description": "No one claims it."
    }));

    assert_eq!(ListDisplayItem::from_article_in(&article, &Utc).author, UNKNOWN_AUTHOR);

    let view = DetailView::build(&article, &Utc);
    assert!(view.sources.is_empty());
    let rendered = view.to_string();
    assert!(!rendered.contains("Sources:"));
    assert!(rendered.contains("No one claims it."));
}

#[test]
fn detail_shows_every_tag() {
    let article = decode(json!({
        "title": "Tagged",
        "tags": ["Tech", "AI", "ML", "Cloud", "Chips", "Policy"]
    }));

    let view = DetailView::build(&article, &Utc);
    assert_eq!(view.tags.len(), article.tags.len());
    assert!(view.to_string().contains("Tags: Tech, AI, ML, Cloud, Chips, Policy"));
}

#[test]
fn building_twice_gives_the_same_view() {
    let article = multi_tag_article();
    assert_eq!(DetailView::build(&article, &Utc), DetailView::build(&article, &Utc));
}

#[test]
fn rendered_detail_lists_sources_with_citations() {
    let article = decode(json!({
        "title": "Quoted",
        "sources": [
            {"name": "Wire A", "url": "https://a.example/1", "citation": "\"It happened.\""},
            {"name": "Wire B", "url": "", "citation": ""}
        ],
        "url": "https://news.example/quoted"
    }));

    let rendered = DetailView::build(&article, &Utc).to_string();
    assert!(rendered.contains("  - Wire A <https://a.example/1>\n      \"It happened.\"\n"));
    assert!(rendered.contains("  - Wire B\n"));
    assert!(rendered.ends_with("Read original: https://news.example/quoted\n"));
}
