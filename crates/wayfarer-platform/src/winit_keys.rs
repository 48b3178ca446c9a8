//! Converts winit logical key names to the names produced by
//! [`parse_keybind`](crate::keymap::parse_keybind).

/// Normalize a winit key name for [`KeyCombo`](crate::input::KeyCombo) lookup.
///
/// Winit reports `"ArrowLeft"`, `" "` for space, and lowercase characters;
/// keybinds use `"Left"`, `"Space"`, and uppercase.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        " " => "Space".to_string(),
        // Shifted "=" on US layouts; zoom-in binds to "=".
        "+" => "=".to_string(),
        "_" => "-".to_string(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        _ => key.to_string(),
    }
}
