//! Full configuration validation.
//!
//! Validates numeric ranges, min/max ordering, URL schemes and keybind
//! uniqueness. Each section has its own validator; this orchestrator calls
//! them all and collects errors into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::WayfarerConfig;
use wayfarer_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WayfarerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    sections::validate_general(&mut errors, config);
    sections::validate_window(&mut errors, config);
    sections::validate_sidebar(&mut errors, config);
    sections::validate_zoom(&mut errors, config);
    sections::validate_auth(&mut errors, config);
    sections::validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
