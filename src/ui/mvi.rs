//! Unidirectional state primitives for the UI.
//!
//! ```text
//! key / network event ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers own every transition of a screen's state; the app shell only
//! translates events into intents and renders whatever state comes back.

/// A user action or system event a reducer understands.
pub trait Intent: Send + 'static {}

/// A self-contained, renderable snapshot.
///
/// `Default` is the state a screen starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
