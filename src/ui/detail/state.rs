use crate::api::AggregateArticle;
use crate::ui::mvi::UiState;

/// Detail view state: closed, or open on exactly one article.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Open {
        article: AggregateArticle,
        /// First visible line of the detail body.
        scroll: u16,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn article(&self) -> Option<&AggregateArticle> {
        match self {
            Self::Open { article, .. } => Some(article),
            Self::Closed => None,
        }
    }

    pub fn scroll(&self) -> u16 {
        match self {
            Self::Open { scroll, .. } => *scroll,
            Self::Closed => 0,
        }
    }
}
