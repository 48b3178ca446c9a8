//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Multiple modifiers: "Cmd+Shift+R". `Cmd` maps to Ctrl outside macOS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub new_tab: String,
    pub close_tab: String,
    pub back: String,
    pub forward: String,
    pub reload: String,
    pub hard_reload: String,
    pub zoom_in: String,
    pub zoom_out: String,
    pub zoom_reset: String,
    pub focus_address_bar: String,
    pub switch_tab_1: String,
    pub switch_tab_2: String,
    pub switch_tab_3: String,
    pub switch_tab_4: String,
    pub switch_tab_5: String,
    pub switch_tab_6: String,
    pub switch_tab_7: String,
    pub switch_tab_8: String,
    pub last_tab: String,
    pub toggle_sidebar: String,
    pub switch_account: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            new_tab: "Cmd+T".into(),
            close_tab: "Cmd+W".into(),
            back: "Alt+Left".into(),
            forward: "Alt+Right".into(),
            reload: "Cmd+R".into(),
            hard_reload: "Cmd+Shift+R".into(),
            zoom_in: "Cmd+=".into(),
            zoom_out: "Cmd+-".into(),
            zoom_reset: "Cmd+0".into(),
            focus_address_bar: "Cmd+L".into(),
            switch_tab_1: "Cmd+1".into(),
            switch_tab_2: "Cmd+2".into(),
            switch_tab_3: "Cmd+3".into(),
            switch_tab_4: "Cmd+4".into(),
            switch_tab_5: "Cmd+5".into(),
            switch_tab_6: "Cmd+6".into(),
            switch_tab_7: "Cmd+7".into(),
            switch_tab_8: "Cmd+8".into(),
            last_tab: "Cmd+9".into(),
            toggle_sidebar: "Cmd+S".into(),
            switch_account: "Cmd+Shift+A".into(),
        }
    }
}
