mod action_enum;
mod labels;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TabId;

    #[test]
    fn switch_to_tab_labels() {
        assert_eq!(Action::SwitchToTab(1).label(), "Switch to Tab 1");
        assert_eq!(Action::SwitchToTab(8).label(), "Switch to Tab 8");
        assert_eq!(Action::SwitchToTab(42).label(), "Switch to Tab");
    }

    #[test]
    fn view_actions_need_active_view() {
        assert!(Action::Reload.needs_active_view());
        assert!(Action::ZoomOut.needs_active_view());
        assert!(Action::Navigate("example.com".into()).needs_active_view());
        assert!(!Action::NewTab.needs_active_view());
        assert!(Action::SwitchAccount.needs_active_view());
        assert!(!Action::ToggleSidebar.needs_active_view());
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::NewTab,
            Action::SwitchToTab(3),
            Action::ActivateTab(TabId::new()),
            Action::Navigate("rust-lang.org".into()),
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
