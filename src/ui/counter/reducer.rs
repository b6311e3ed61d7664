//! Reducer for the counter widget.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Two-state machine over the error flag; the counter rides along.
///
/// ```text
/// OK    --Increment-->            OK    (+1)
/// OK    --Decrement, n > 0-->     OK    (-1)
/// OK    --Decrement, n == 0-->    ERROR (unchanged)
/// ERROR --Increment-->            OK    (+1)
/// ERROR --Decrement-->            ERROR (unchanged)
/// ```
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState::ok(state.counter().saturating_add(1)),
            CounterIntent::Decrement => match state.counter().checked_sub(1) {
                Some(counter) => CounterState::ok(counter),
                None => CounterState::rejected(),
            },
        }
    }
}
