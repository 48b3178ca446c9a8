//! Wayfarer configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wayfarer_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("home page: {}", config.general.home_url);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::WayfarerConfig;

use std::path::Path;
use wayfarer_common::ConfigError;

/// Load and validate the config.
///
/// With `path`, that file must exist. Without it, `config.toml` is read from
/// the OS config directory and a documented default is written if missing.
pub fn load_config(path: Option<&Path>) -> Result<WayfarerConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
