use std::sync::Arc;

use crate::api::AggregateArticle;
use crate::ui::mvi::UiState;

/// Page-level state of the news list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedState {
    /// No fetch has completed yet.
    #[default]
    Loading,

    /// Latest successful batch. May be empty.
    Ready { batch: Arc<[AggregateArticle]> },

    /// Latest fetch failed; the list is replaced by this message.
    Failed { message: String },
}

impl UiState for FeedState {}

impl FeedState {
    /// Current batch, empty unless `Ready`.
    pub fn batch(&self) -> Arc<[AggregateArticle]> {
        match self {
            Self::Ready { batch } => Arc::clone(batch),
            _ => Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ready { batch } => batch.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
