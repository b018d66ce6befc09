//! Full configuration validation.
//!
//! Validates numeric ranges and URL shapes. Each section has its own
//! function; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::GooseConfig;
use goose_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GooseConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_typewriter(&mut errors, config);
    sections::validate_server(&mut errors, config);
    sections::validate_sounds(&mut errors, config);
    sections::validate_greeting(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
