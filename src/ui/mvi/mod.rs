//! Model-View-Intent (MVI) primitives shared by UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! A feature module defines one state type, one intent enum and a reducer
//! that is the only place the state changes. Rendering reads the state and
//! never writes it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
