//! Intent marker trait.

/// An action fed to a reducer: a click, a key press, or any other discrete
/// event a feature reacts to.
pub trait Intent: Send + 'static {}
