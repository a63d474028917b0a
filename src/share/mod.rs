//! Share affordances as an ordered capability-probe chain.
//!
//! Tiers are tried in order; a tier that reports itself unavailable is
//! skipped without error. Only the failure of the last available tier
//! reaches the caller.

mod clipboard;
mod native;

use thiserror::Error;

use crate::api::AggregateArticle;
use crate::config::ShareConfig;
use crate::news::ListDisplayItem;

pub use clipboard::ClipboardShare;
pub use native::CommandShare;

pub const ARTICLE_COPIED: &str = "Article information copied to clipboard!";
pub const LINK_COPIED: &str = "Link copied to clipboard!";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to run share command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("No share method available")]
    Unavailable,
}

/// What gets shared, in every form a tier might need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
    /// Block written by the clipboard tier.
    pub clipboard_text: String,
    /// Notice shown after a clipboard copy.
    pub confirmation: &'static str,
}

impl SharePayload {
    /// Share from the detail view.
    ///
    /// Falls back to `page_url` when the article has no canonical link.
    pub fn for_article(article: &AggregateArticle, page_url: &str) -> Self {
        let url = article.canonical_url().unwrap_or(page_url).to_string();
        Self {
            clipboard_text: format!("{}\n\n{}\n\n{}", article.title, article.description, url),
            title: article.title.clone(),
            text: article.description.clone(),
            url,
            confirmation: ARTICLE_COPIED,
        }
    }

    /// Share from a summary card. Always links the page, not the article.
    pub fn for_card(item: &ListDisplayItem, page_url: &str) -> Self {
        Self {
            title: item.title.clone(),
            text: format!("Check out this article: {}", item.title),
            url: page_url.to_string(),
            clipboard_text: format!("{} - {}", item.title, page_url),
            confirmation: LINK_COPIED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed off to an external share mechanism.
    Shared { tier: &'static str },
    /// Written to the clipboard; `notice` should be shown to the user.
    Copied { notice: &'static str },
}

impl ShareOutcome {
    /// Footer notice for this outcome, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared { .. } => None,
            ShareOutcome::Copied { notice } => Some(notice),
        }
    }
}

/// One share mechanism.
pub trait ShareTarget: Send {
    fn name(&self) -> &'static str;

    /// Probe whether this tier can be used right now.
    fn is_available(&mut self) -> bool;

    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError>;
}

pub struct ShareChain {
    tiers: Vec<Box<dyn ShareTarget>>,
}

impl ShareChain {
    pub fn new(tiers: Vec<Box<dyn ShareTarget>>) -> Self {
        Self { tiers }
    }

    /// Native command tier (when configured), then the system clipboard.
    pub fn from_config(config: &ShareConfig) -> Self {
        Self::new(vec![
            Box::new(CommandShare::new(config.command.clone())),
            Box::new(ClipboardShare::new()),
        ])
    }

    pub fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        let mut last_error = None;

        for tier in self.tiers.iter_mut() {
            if !tier.is_available() {
                tracing::debug!(tier = tier.name(), "Share tier unavailable, skipping");
                continue;
            }

            match tier.share(payload) {
                Ok(outcome) => {
                    tracing::debug!(tier = tier.name(), "Shared \"{}\"", payload.title);
                    return Ok(outcome);
                }
                Err(e) => {
                    tracing::warn!(tier = tier.name(), "Share tier failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ShareError::Unavailable))
    }
}
