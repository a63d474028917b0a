//! Presentation logic over fetched articles, independent of the terminal.
//!
//! - `projection` - summary cards
//! - `selection` - card to record lookup
//! - `detail` - detail view ordering and formatting

pub mod detail;
pub mod projection;
pub mod selection;

pub use detail::{format_long, format_short, ordered_history, DetailView, HistoryLine};
pub use projection::{project_batch, CardTags, ListDisplayItem, UNKNOWN_AUTHOR, UNKNOWN_DATE};
pub use selection::resolve;
