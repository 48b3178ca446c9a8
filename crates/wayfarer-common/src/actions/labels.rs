use super::Action;

impl Action {
    /// Human-readable label, used for chrome tooltips and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTab => "New Tab",
            Action::CloseActiveTab => "Close Tab",
            Action::CloseTab(_) => "Close Tab",
            Action::ActivateTab(_) => "Select Tab",
            Action::SwitchToTab(1) => "Switch to Tab 1",
            Action::SwitchToTab(2) => "Switch to Tab 2",
            Action::SwitchToTab(3) => "Switch to Tab 3",
            Action::SwitchToTab(4) => "Switch to Tab 4",
            Action::SwitchToTab(5) => "Switch to Tab 5",
            Action::SwitchToTab(6) => "Switch to Tab 6",
            Action::SwitchToTab(7) => "Switch to Tab 7",
            Action::SwitchToTab(8) => "Switch to Tab 8",
            Action::SwitchToTab(_) => "Switch to Tab",
            Action::SwitchToLastTab => "Switch to Last Tab",
            Action::Navigate(_) => "Navigate",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::Reload => "Reload",
            Action::ReloadIgnoringCache => "Hard Reload",
            Action::ZoomIn => "Zoom In",
            Action::ZoomOut => "Zoom Out",
            Action::ZoomReset => "Actual Size",
            Action::FocusAddressBar => "Focus Address Bar",
            Action::ToggleSidebar => "Toggle Sidebar",
            Action::SwitchAccount => "Switch Account",
            Action::None => "None",
        }
    }

    /// Whether the action reads or drives the active content view and is a
    /// no-op without one.
    pub fn needs_active_view(&self) -> bool {
        matches!(
            self,
            Action::Navigate(_)
                | Action::GoBack
                | Action::GoForward
                | Action::Reload
                | Action::ReloadIgnoringCache
                | Action::ZoomIn
                | Action::ZoomOut
                | Action::ZoomReset
                | Action::SwitchAccount
        )
    }
}
