use std::sync::Arc;

use crate::api::AggregateArticle;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A card (or its info affordance) was activated.
    Activate {
        /// Title of the activated card.
        title: String,
        /// Batch the card should be resolved against.
        batch: Arc<[AggregateArticle]>,
    },

    /// Close the detail view.
    Dismiss,

    ScrollUp,

    ScrollDown,
}

impl Intent for DetailIntent {}
