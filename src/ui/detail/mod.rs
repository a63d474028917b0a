//! Article detail overlay.
//!
//! MVI layout:
//! - `state.rs` - closed / open on one article
//! - `intent.rs` - activate, dismiss, scroll
//! - `reducer.rs` - transitions, including title resolution
//! - `dialog.rs` - rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{detail_lines, render_detail_dialog};
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;
