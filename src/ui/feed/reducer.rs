use crate::ui::mvi::Reducer;

use super::intent::FeedIntent;
use super::state::FeedState;

/// Last write wins: every completion replaces whatever is shown.
pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::Loaded { articles } => FeedState::Ready {
                batch: articles.into(),
            },
            FeedIntent::Failed { message } => FeedState::Failed { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AggregateArticle;

    fn articles(titles: &[&str]) -> Vec<AggregateArticle> {
        titles
            .iter()
            .map(|t| serde_json::from_value(serde_json::json!({ "title": t })).unwrap())
            .collect()
    }

    #[test]
    fn starts_loading() {
        assert_eq!(FeedState::default(), FeedState::Loading);
        assert!(FeedState::default().is_empty());
    }

    #[test]
    fn later_batch_replaces_earlier() {
        let state = FeedReducer::reduce(
            FeedState::Loading,
            FeedIntent::Loaded {
                articles: articles(&["old-1", "old-2"]),
            },
        );
        let state = FeedReducer::reduce(
            state,
            FeedIntent::Loaded {
                articles: articles(&["new"]),
            },
        );
        let batch = state.batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].title, "new");
    }

    #[test]
    fn failure_replaces_list() {
        let state = FeedReducer::reduce(
            FeedState::Loading,
            FeedIntent::Loaded {
                articles: articles(&["a"]),
            },
        );
        let state = FeedReducer::reduce(
            state,
            FeedIntent::Failed {
                message: "HTTP error! status: 500".into(),
            },
        );
        assert!(state.is_empty());
        assert!(matches!(state, FeedState::Failed { ref message } if message.contains("500")));
    }

    #[test]
    fn success_after_failure_recovers() {
        let state = FeedState::Failed {
            message: "down".into(),
        };
        let state = FeedReducer::reduce(
            state,
            FeedIntent::Loaded {
                articles: Vec::new(),
            },
        );
        assert!(matches!(state, FeedState::Ready { .. }));
        assert!(state.is_empty());
    }
}
