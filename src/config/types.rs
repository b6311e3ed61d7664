use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub counter: CounterConfig,
    pub ui: UiConfig,
    pub keys: KeyBindings,
    pub logging: LoggingConfig,
}

/// Widget settings applied at mount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Counter value the widget starts from.
    pub initial: u64,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Longest wait for an input event before redrawing (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse so the controls can be clicked (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Single-character shortcuts. Arrow keys, Tab, Enter, Esc and Ctrl+C are
/// always bound in addition to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_increment_key")]
    pub increment: char,
    #[serde(default = "default_decrement_key")]
    pub decrement: char,
    #[serde(default = "default_quit_key")]
    pub quit: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file override. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_increment_key() -> char {
    '+'
}

fn default_decrement_key() -> char {
    '-'
}

fn default_quit_key() -> char {
    'q'
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            increment: default_increment_key(),
            decrement: default_decrement_key(),
            quit: default_quit_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
