//! Share chain ordering and fallthrough, with a recording clipboard.

mod common;

use common::{articles, make_app};
use newsdesk::share::{
    CommandShare, ShareChain, ShareError, ShareOutcome, SharePayload, ShareTarget, ARTICLE_COPIED,
    LINK_COPIED,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Clipboard stand-in that records every write.
#[derive(Clone, Default)]
struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl ShareTarget for RecordingClipboard {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_available(&mut self) -> bool {
        true
    }

    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        self.writes.lock().push(payload.clipboard_text.clone());
        Ok(ShareOutcome::Copied {
            notice: payload.confirmation,
        })
    }
}

struct Absent;

impl ShareTarget for Absent {
    fn name(&self) -> &'static str {
        "absent"
    }

    fn is_available(&mut self) -> bool {
        false
    }

    fn share(&mut self, _payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        panic!("unavailable tier must not be invoked");
    }
}

fn chain_without_native(clipboard: &RecordingClipboard) -> ShareChain {
    ShareChain::new(vec![
        Box::new(CommandShare::new(None)),
        Box::new(clipboard.clone()),
    ])
}

#[test]
fn no_native_share_falls_back_to_clipboard() {
    let clipboard = RecordingClipboard::default();
    let mut app = make_app();
    app.set_share_chain(chain_without_native(&clipboard));
    app.on_news_loaded(articles(&["Grid upgrade"]));
    app.activate_selected();

    app.share_open_article();

    assert_eq!(
        clipboard.writes.lock().as_slice(),
        ["Grid upgrade\n\nGrid upgrade summary\n\nhttps://news.example/grid-upgrade"]
    );
    let notice = app.notice().unwrap();
    assert_eq!(notice.text, ARTICLE_COPIED);
    assert!(!notice.is_error);
}

#[test]
fn card_share_copies_title_and_page_link() {
    let clipboard = RecordingClipboard::default();
    let mut app = make_app();
    app.set_share_chain(chain_without_native(&clipboard));
    app.on_news_loaded(articles(&["Grid upgrade"]));

    app.share_selected_card();

    assert_eq!(
        clipboard.writes.lock().as_slice(),
        ["Grid upgrade - http://localhost:10000/api/news"]
    );
    assert_eq!(app.notice().unwrap().text, LINK_COPIED);
}

#[test]
fn unavailable_tiers_are_skipped_in_order() {
    let clipboard = RecordingClipboard::default();
    let mut chain = ShareChain::new(vec![Box::new(Absent), Box::new(clipboard.clone())]);
    let payload = SharePayload::for_article(&articles(&["One"])[0], "http://page");

    let outcome = chain.share(&payload).unwrap();

    assert_eq!(outcome, ShareOutcome::Copied { notice: ARTICLE_COPIED });
    assert_eq!(clipboard.writes.lock().len(), 1);
}

#[test]
fn only_unavailable_tiers_is_an_error() {
    let mut chain = ShareChain::new(vec![Box::new(Absent), Box::new(CommandShare::new(None))]);
    let payload = SharePayload::for_article(&articles(&["One"])[0], "http://page");
    assert!(matches!(chain.share(&payload), Err(ShareError::Unavailable)));
}

#[test]
fn native_command_that_cannot_start_falls_through_to_clipboard() {
    let clipboard = RecordingClipboard::default();
    let mut chain = ShareChain::new(vec![
        Box::new(CommandShare::new(Some("no-such-share-tool-4b7".into()))),
        Box::new(clipboard.clone()),
    ]);
    let payload = SharePayload::for_article(&articles(&["One"])[0], "http://page");

    assert!(chain.share(&payload).is_ok());
    assert_eq!(clipboard.writes.lock().len(), 1);
}

#[cfg(unix)]
#[test]
fn native_share_shows_no_notice() {
    let clipboard = RecordingClipboard::default();
    let mut app = make_app();
    app.set_share_chain(ShareChain::new(vec![
        Box::new(CommandShare::new(Some("true".into()))),
        Box::new(clipboard.clone()),
    ]));
    app.on_news_loaded(articles(&["One"]));

    app.share_selected_card();

    assert!(app.notice().is_none());
    assert!(clipboard.writes.lock().is_empty());
}

#[cfg(unix)]
#[test]
fn slow_share_command_does_not_block_the_app() {
    let clipboard = RecordingClipboard::default();
    let mut app = make_app();
    app.set_share_chain(ShareChain::new(vec![
        Box::new(CommandShare::new(Some("sleep 5".into()))),
        Box::new(clipboard.clone()),
    ]));
    app.on_news_loaded(articles(&["One"]));
    app.activate_selected();

    let started = std::time::Instant::now();
    app.share_open_article();

    assert!(started.elapsed() < std::time::Duration::from_secs(2));
    assert!(app.notice().is_none());
    assert!(clipboard.writes.lock().is_empty());
}

#[test]
fn last_tier_failure_is_reported() {
    let mut app = make_app();
    app.set_share_chain(ShareChain::new(vec![Box::new(CommandShare::new(Some(
        "no-such-share-tool-4b7".into(),
    )))]));
    app.on_news_loaded(articles(&["One"]));

    app.share_selected_card();

    let notice = app.notice().unwrap();
    assert!(notice.is_error);
    assert!(notice.text.starts_with("Share failed:"));
}
