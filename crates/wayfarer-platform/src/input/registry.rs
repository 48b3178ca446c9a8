use std::collections::HashMap;

use wayfarer_common::actions::Action;
use wayfarer_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
///
/// Built from [`KeybindConfig`] at startup.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped; empty
    /// strings leave the action unbound.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: Vec<(&str, Action)> = vec![
            (&config.new_tab, Action::NewTab),
            (&config.close_tab, Action::CloseActiveTab),
            (&config.back, Action::GoBack),
            (&config.forward, Action::GoForward),
            (&config.reload, Action::Reload),
            (&config.hard_reload, Action::ReloadIgnoringCache),
            (&config.zoom_in, Action::ZoomIn),
            (&config.zoom_out, Action::ZoomOut),
            (&config.zoom_reset, Action::ZoomReset),
            (&config.focus_address_bar, Action::FocusAddressBar),
            (&config.switch_tab_1, Action::SwitchToTab(1)),
            (&config.switch_tab_2, Action::SwitchToTab(2)),
            (&config.switch_tab_3, Action::SwitchToTab(3)),
            (&config.switch_tab_4, Action::SwitchToTab(4)),
            (&config.switch_tab_5, Action::SwitchToTab(5)),
            (&config.switch_tab_6, Action::SwitchToTab(6)),
            (&config.switch_tab_7, Action::SwitchToTab(7)),
            (&config.switch_tab_8, Action::SwitchToTab(8)),
            (&config.last_tab, Action::SwitchToLastTab),
            (&config.toggle_sidebar, Action::ToggleSidebar),
            (&config.switch_account, Action::SwitchAccount),
        ];

        for (binding_str, action) in mappings {
            if binding_str.trim().is_empty() {
                continue;
            }
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    /// Look up an action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Find the display string for a given action's keybind (reverse lookup).
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
