use crate::ui::mvi::Intent;

/// Actions the counter widget accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Increment control activated.
    Increment,
    /// Decrement control activated. Rejected (error shown) at zero.
    Decrement,
}

impl Intent for CounterIntent {}
