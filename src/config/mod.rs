//! Configuration: TOML types, loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, KeyBindings, LoggingConfig, UiConfig};
