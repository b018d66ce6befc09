//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the goose crates. Targets match by
    /// prefix, so `goose` also covers `goose_dialog` and `goose_config`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "goose=trace",
            LogLevel::Debug => "goose=debug",
            LogLevel::Info => "goose=info",
            LogLevel::Warning => "goose=warn",
            LogLevel::Error => "goose=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
