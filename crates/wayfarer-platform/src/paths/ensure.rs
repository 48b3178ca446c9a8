use std::fs;

use wayfarer_common::PlatformError;

use super::resolve::{config_dir, data_dir, log_dir};

/// Creates the config, data and log directories if they do not exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, log_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| PlatformError::PathError(e.to_string()))?;
    }
    Ok(())
}
