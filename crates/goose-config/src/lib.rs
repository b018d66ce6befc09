//! Mr. Goose configuration system.
//!
//! TOML-based configuration with range validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use goose_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GooseConfig, CONFIG_SCHEMA_VERSION};

use goose_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<GooseConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<GooseConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GooseConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GooseConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"typewriter\""));
        assert!(json.contains("\"server\""));
        assert!(json.contains("\"sounds\""));
        assert!(json.contains("\"greeting\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GooseConfig::default();
        let json = config_to_json(&config);
        let parsed: GooseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.typewriter.cadence_ms, 40);
        assert_eq!(parsed.server.url, "ws://localhost:3000");
        assert_eq!(parsed.sounds.dialog_volume, 20);
    }

    #[test]
    fn load_config_from_missing_path() {
        let err = load_config_from(Path::new("/tmp/definitely_missing_goose.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[typewriter]\ncadence_ms = 0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("typewriter.cadence_ms"));
    }
}
