use super::{KeyBind, Modifier};

/// Converts a [`KeyBind`] into a platform-appropriate display string,
/// shown as a tooltip hint in the chrome.
///
/// macOS uses modifier symbols joined without separators; elsewhere the
/// names are joined with `+`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<String> = kb.modifiers.iter().map(|m| display_modifier(*m)).collect();
    parts.push(display_key(&kb.key));

    if cfg!(target_os = "macos") {
        parts.join("")
    } else {
        parts.join("+")
    }
}

fn display_modifier(modifier: Modifier) -> String {
    if cfg!(target_os = "macos") {
        match modifier {
            Modifier::Ctrl => "\u{2303}".into(),
            Modifier::Alt => "\u{2325}".into(),
            Modifier::Shift => "\u{21E7}".into(),
            Modifier::Super => "\u{2318}".into(),
        }
    } else {
        match modifier {
            Modifier::Ctrl => "Ctrl".into(),
            Modifier::Alt => "Alt".into(),
            Modifier::Shift => "Shift".into(),
            Modifier::Super if cfg!(target_os = "windows") => "Win".into(),
            Modifier::Super => "Super".into(),
        }
    }
}

fn display_key(key: &str) -> String {
    if !cfg!(target_os = "macos") {
        return key.to_string();
    }
    match key {
        "Left" => "\u{2190}".into(),
        "Right" => "\u{2192}".into(),
        "Up" => "\u{2191}".into(),
        "Down" => "\u{2193}".into(),
        "Enter" => "\u{21A9}".into(),
        "Escape" => "\u{238B}".into(),
        other => other.to_string(),
    }
}
