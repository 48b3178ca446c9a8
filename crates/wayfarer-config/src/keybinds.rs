//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use wayfarer_common::ConfigError;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("new_tab", &config.new_tab),
        ("close_tab", &config.close_tab),
        ("back", &config.back),
        ("forward", &config.forward),
        ("reload", &config.reload),
        ("hard_reload", &config.hard_reload),
        ("zoom_in", &config.zoom_in),
        ("zoom_out", &config.zoom_out),
        ("zoom_reset", &config.zoom_reset),
        ("focus_address_bar", &config.focus_address_bar),
        ("switch_tab_1", &config.switch_tab_1),
        ("switch_tab_2", &config.switch_tab_2),
        ("switch_tab_3", &config.switch_tab_3),
        ("switch_tab_4", &config.switch_tab_4),
        ("switch_tab_5", &config.switch_tab_5),
        ("switch_tab_6", &config.switch_tab_6),
        ("switch_tab_7", &config.switch_tab_7),
        ("switch_tab_8", &config.switch_tab_8),
        ("last_tab", &config.last_tab),
        ("toggle_sidebar", &config.toggle_sidebar),
        ("switch_account", &config.switch_account),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Empty bindings are treated as "unbound" and skipped.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if binding.is_empty() {
            continue;
        }
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}
