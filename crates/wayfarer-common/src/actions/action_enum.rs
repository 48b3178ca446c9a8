use serde::{Deserialize, Serialize};

use crate::id::TabId;

/// Every user-triggerable action in the browser shell.
///
/// Keybinds and the chrome UI both resolve to an `Action`.
/// The browser dispatcher matches on this enum to route to the tab registry
/// or the active content view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Tabs --
    NewTab,
    CloseActiveTab,
    CloseTab(TabId),
    ActivateTab(TabId),
    SwitchToTab(u32),
    SwitchToLastTab,

    // -- Navigation --
    Navigate(String),
    GoBack,
    GoForward,
    Reload,
    ReloadIgnoringCache,

    // -- Zoom --
    ZoomIn,
    ZoomOut,
    ZoomReset,

    // -- UI --
    FocusAddressBar,
    ToggleSidebar,

    // -- Auth --
    SwitchAccount,

    // -- Noop --
    None,
}
