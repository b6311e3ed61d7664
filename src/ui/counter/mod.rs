//! Counter widget feature module.
//!
//! Holds a non-negative counter and a below-zero error flag, driven by two
//! intents.
//!
//! - `state.rs` - `CounterState` (counter + error flag)
//! - `intent.rs` - user actions (Increment, Decrement)
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `view.rs` - `State -> View` projection with stable element ids

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{CounterView, Element, TestId, ERROR_MESSAGE, WIDGET_TITLE};
