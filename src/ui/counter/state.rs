use crate::ui::mvi::UiState;

/// Widget state.
///
/// `counter` is unsigned, so the `counter >= 0` invariant holds by
/// construction. `error_visible` is set only by a decrement rejected at zero
/// and cleared by the next successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    counter: u64,
    error_visible: bool,
}

impl UiState for CounterState {}

impl CounterState {
    /// State of a freshly mounted widget showing `counter`, error hidden.
    pub fn with_counter(counter: u64) -> Self {
        Self {
            counter,
            error_visible: false,
        }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub(super) fn ok(counter: u64) -> Self {
        Self::with_counter(counter)
    }

    pub(super) fn rejected() -> Self {
        Self {
            counter: 0,
            error_visible: true,
        }
    }
}
