//! Snapshot of browser state pushed to the chrome view.

use std::collections::BTreeMap;

use serde::Serialize;

use wayfarer_common::{Action, TabId};
use wayfarer_platform::KeybindRegistry;
use wayfarer_tabs::{Browser, Tab};

/// Chrome buttons and the action each one triggers.
const BUTTONS: &[(&str, Action)] = &[
    ("back", Action::GoBack),
    ("forward", Action::GoForward),
    ("reload", Action::Reload),
    ("toggle-sidebar", Action::ToggleSidebar),
    ("new-tab", Action::NewTab),
    ("switch-account", Action::SwitchAccount),
];

/// Tooltip per chrome button id: the action label plus its shortcut.
pub fn button_tooltips(keybinds: &KeybindRegistry) -> BTreeMap<&'static str, String> {
    BUTTONS
        .iter()
        .map(|(id, action)| {
            let tooltip = match keybinds.keybind_for_action(action) {
                Some(keys) => format!("{} ({keys})", action.label()),
                None => action.label().to_string(),
            };
            (*id, tooltip)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarSnapshot {
    pub visible: bool,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeState {
    pub tabs: Vec<Tab>,
    pub active: Option<TabId>,
    pub address: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub sidebar: SidebarSnapshot,
    pub nav_bar_height: u32,
}

impl ChromeState {
    pub fn capture(browser: &Browser, nav_bar_height: u32) -> Self {
        let view = browser.registry().active_view();
        Self {
            tabs: browser.tabs(),
            active: browser.active_id(),
            address: browser.address_bar().to_string(),
            can_go_back: view.is_some_and(|v| v.can_go_back()),
            can_go_forward: view.is_some_and(|v| v.can_go_forward()),
            sidebar: SidebarSnapshot {
                visible: browser.sidebar().is_visible(),
                width: browser.sidebar().width(),
            },
            nav_bar_height,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_config::schema::KeybindConfig;
    use wayfarer_config::WayfarerConfig;
    use wayfarer_tabs::{ContentView, ViewError, ViewFactory, ViewSpec};

    /// Factory for a host that never finishes starting.
    struct Unready;

    impl ViewFactory for Unready {
        fn create(&mut self, _tab: TabId, _spec: &ViewSpec) -> Result<Box<dyn ContentView>, ViewError> {
            Err(ViewError::NotReady)
        }
    }

    fn browser() -> Browser {
        Browser::new(&WayfarerConfig::default(), Box::new(Unready))
    }

    #[test]
    fn captures_tabs_and_sidebar() {
        let mut browser = browser();
        browser.dispatch(Action::NewTab);

        let state = ChromeState::capture(&browser, 44);
        assert_eq!(state.tabs.len(), 2);
        assert_eq!(state.active, Some(state.tabs[1].id));
        assert_eq!(state.address, "https://google.com");
        assert!(!state.can_go_back);
        assert_eq!(
            state.sidebar,
            SidebarSnapshot {
                visible: true,
                width: 250
            }
        );
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let mut browser = browser();
        browser.dispatch(Action::ToggleSidebar);
        let json = ChromeState::capture(&browser, 40).to_json();

        assert_eq!(json["navBarHeight"], 40);
        assert_eq!(json["canGoBack"], false);
        assert_eq!(json["sidebar"]["visible"], false);
        assert_eq!(json["tabs"][0]["title"], "New Tab");
        assert!(json["tabs"][0]["favicon"].as_str().unwrap().starts_with("data:"));
    }

    #[test]
    fn tooltips_name_action_and_shortcut() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        let tooltips = button_tooltips(&registry);
        assert_eq!(tooltips.len(), 6);
        assert!(tooltips["new-tab"].starts_with("New Tab ("));
        assert!(tooltips["switch-account"].starts_with("Switch Account ("));
    }

    #[test]
    fn unbound_action_tooltip_is_label_only() {
        let config = KeybindConfig {
            reload: String::new(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(button_tooltips(&registry)["reload"], "Reload");
    }
}
