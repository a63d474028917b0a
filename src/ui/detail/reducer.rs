use crate::news::selection;
use crate::ui::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Activate { title, batch } => {
                // Release the previous selection before resolving the new one.
                drop(state);
                match selection::resolve(&batch, &title) {
                    Some(article) => DetailState::Open {
                        article: article.clone(),
                        scroll: 0,
                    },
                    None => {
                        tracing::debug!(%title, "Activated card is not in the current batch");
                        DetailState::Closed
                    }
                }
            }

            DetailIntent::Dismiss => DetailState::Closed,

            DetailIntent::ScrollUp => match state {
                DetailState::Open { article, scroll } => DetailState::Open {
                    article,
                    scroll: scroll.saturating_sub(1),
                },
                closed => closed,
            },

            DetailIntent::ScrollDown => match state {
                DetailState::Open { article, scroll } => DetailState::Open {
                    article,
                    scroll: scroll.saturating_add(1),
                },
                closed => closed,
            },
        }
    }
}
