//! State marker trait.

/// Snapshot of everything a feature needs to render.
///
/// `Default` is the mounted state; reducers take states by value and the
/// shell swaps them in with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
