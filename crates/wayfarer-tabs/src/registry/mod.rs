//! The ordered tab collection and its content views.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockHost;
    use wayfarer_common::{Rect, TabId};

    const HOME: &str = "https://google.com";

    fn registry(host: &MockHost) -> TabRegistry {
        TabRegistry::new(host.factory(), "persist:main", HOME, 1.0, HOME)
    }

    #[test]
    fn starts_with_one_active_default_tab() {
        let host = MockHost::new();
        let reg = registry(&host);
        assert_eq!(reg.len(), 1);
        let tab = reg.active_tab().unwrap();
        assert_eq!(tab.url, HOME);
        assert_eq!(tab.title, DEFAULT_TITLE);
        assert_eq!(tab.favicon, DEFAULT_FAVICON);
        assert_eq!(reg.address_bar(), HOME);
    }

    #[test]
    fn views_share_the_partition_and_allow_popups() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        let b = reg.create_tab("https://example.com");
        for id in [a, b] {
            let spec = host.state(id).spec.unwrap();
            assert_eq!(spec.partition, "persist:main");
            assert!(spec.allow_popups);
        }
        assert_eq!(host.state(b).spec.unwrap().url, "https://example.com");
    }

    #[test]
    fn opener_is_recorded_for_page_opened_tabs() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let first = reg.active_id().unwrap();
        let popup = reg.create_tab_from("https://example.com/share", Some(first));
        assert_eq!(reg.opener(popup), Some(first));
        assert_eq!(reg.opener(first), None);
        assert_eq!(reg.opener(TabId::new()), None);
    }

    #[test]
    fn views_start_at_default_zoom() {
        let host = MockHost::new();
        let mut reg = TabRegistry::new(host.factory(), "persist:main", HOME, 1.25, HOME);
        let first = reg.active_id().unwrap();
        let second = reg.create_tab("https://example.com");
        assert_eq!(host.state(first).zoom, 1.25);
        assert_eq!(host.state(second).zoom, 1.25);
    }

    #[test]
    fn create_tab_activates_and_hides_others() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let first = reg.active_id().unwrap();
        let second = reg.create_tab("https://example.com");

        assert_eq!(reg.active_id(), Some(second));
        assert!(host.state(second).visible);
        assert!(!host.state(first).visible);
        assert_eq!(reg.address_bar(), "https://example.com");
    }

    #[test]
    fn ids_are_unique() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let ids: Vec<TabId> = (0..5).map(|_| reg.create_tab(HOME)).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn activate_unknown_is_noop() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let active = reg.active_id();
        assert!(!reg.activate_tab(TabId::new()));
        assert_eq!(reg.active_id(), active);
    }

    #[test]
    fn activate_shows_only_target() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        let b = reg.create_tab("https://b.example");
        let c = reg.create_tab("https://c.example");

        assert!(reg.activate_tab(a));
        assert!(host.state(a).visible);
        assert!(!host.state(b).visible);
        assert!(!host.state(c).visible);
    }

    #[test]
    fn activate_syncs_address_from_ready_view() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        reg.create_tab("https://b.example");
        host.with(a, |s| {
            s.ready = true;
            s.url = "https://www.google.com/?hl=en".into();
        });

        reg.activate_tab(a);
        assert_eq!(reg.address_bar(), "https://www.google.com/?hl=en");
    }

    #[test]
    fn activate_unready_view_keeps_tab_url() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        reg.create_tab("https://b.example");

        reg.activate_tab(a);
        assert_eq!(reg.address_bar(), HOME);
    }

    #[test]
    fn closing_only_tab_leaves_fresh_default() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let only = reg.active_id().unwrap();

        assert!(reg.close_tab(only));
        assert_eq!(reg.len(), 1);
        let fresh = reg.active_id().unwrap();
        assert_ne!(fresh, only);
        assert_eq!(reg.active_tab().unwrap().url, HOME);
        assert!(host.state(only).dropped);
    }

    #[test]
    fn closing_non_active_tab_keeps_active() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        let b = reg.create_tab("https://b.example");
        let c = reg.create_tab("https://c.example");
        reg.activate_tab(b);

        assert!(reg.close_tab(a));
        assert_eq!(reg.active_id(), Some(b));
        assert!(reg.close_tab(c));
        assert_eq!(reg.active_id(), Some(b));
    }

    #[test]
    fn closing_active_prefers_tab_at_same_index() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        let b = reg.create_tab("https://b.example");
        let c = reg.create_tab("https://c.example");

        reg.activate_tab(b);
        reg.close_tab(b);
        assert_eq!(reg.active_id(), Some(c));
        assert!(host.state(c).visible);

        reg.close_tab(c);
        assert_eq!(reg.active_id(), Some(a));
    }

    #[test]
    fn close_unknown_is_noop() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        assert!(!reg.close_tab(TabId::new()));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn load_update_merges_only_given_fields() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let id = reg.active_id().unwrap();

        assert!(reg.update_from_load_event(
            id,
            LoadUpdate {
                title: Some("Google".into()),
                ..Default::default()
            }
        ));
        let tab = reg.tab(id).unwrap();
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.url, HOME);
        assert_eq!(tab.favicon, DEFAULT_FAVICON);

        assert!(!reg.update_from_load_event(TabId::new(), LoadUpdate::default()));
    }

    #[test]
    fn refresh_reads_ready_view() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let id = reg.active_id().unwrap();
        host.with(id, |s| {
            s.ready = true;
            s.title = "Google".into();
            s.url = "https://www.google.com/".into();
        });

        assert!(reg.refresh_from_view(id, None));
        let tab = reg.tab(id).unwrap();
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.url, "https://www.google.com/");
    }

    #[test]
    fn refresh_unready_view_keeps_previous_values() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let id = reg.active_id().unwrap();
        reg.update_from_load_event(
            id,
            LoadUpdate {
                title: Some("Before".into()),
                ..Default::default()
            },
        );

        assert!(reg.refresh_from_view(id, None));
        let tab = reg.tab(id).unwrap();
        assert_eq!(tab.title, "Before");
        assert_eq!(tab.url, HOME);
    }

    #[test]
    fn refresh_uses_fallback_url_when_unready() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let id = reg.active_id().unwrap();
        reg.refresh_from_view(id, Some("https://www.google.com/webhp"));
        assert_eq!(reg.tab(id).unwrap().url, "https://www.google.com/webhp");
    }

    #[test]
    fn refresh_ignores_empty_title() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let id = reg.active_id().unwrap();
        host.with(id, |s| s.ready = true);
        reg.refresh_from_view(id, None);
        assert_eq!(reg.tab(id).unwrap().title, DEFAULT_TITLE);
    }

    #[test]
    fn tab_created_before_host_ready_gets_view_later() {
        let host = MockHost::new();
        host.set_failing(true);
        let mut reg = registry(&host);
        let id = reg.active_id().unwrap();

        assert_eq!(reg.len(), 1);
        assert!(!reg.has_view(id));
        assert!(reg.active_view().is_none());

        assert_eq!(reg.attach_pending_views(), 0);
        host.set_failing(false);
        assert_eq!(reg.attach_pending_views(), 1);
        assert!(reg.has_view(id));
        assert!(host.state(id).visible);
        assert_eq!(reg.attach_pending_views(), 0);
    }

    #[test]
    fn ordinals_are_one_based() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        let b = reg.create_tab("https://b.example");

        assert_eq!(reg.tab_at_ordinal(0), None);
        assert_eq!(reg.tab_at_ordinal(1), Some(a));
        assert_eq!(reg.tab_at_ordinal(2), Some(b));
        assert_eq!(reg.tab_at_ordinal(3), None);
        assert_eq!(reg.last_tab(), Some(b));
        assert_eq!(reg.index_of(b), Some(1));
    }

    #[test]
    fn bounds_reach_existing_and_future_views() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        let a = reg.active_id().unwrap();
        let rect = Rect::new(250.0, 44.0, 950.0, 756.0);

        reg.set_all_bounds(rect);
        let b = reg.create_tab("https://b.example");
        assert_eq!(host.state(a).bounds, Some(rect));
        assert_eq!(host.state(b).bounds, Some(rect));
    }

    #[test]
    fn tabs_snapshot_is_in_insertion_order() {
        let host = MockHost::new();
        let mut reg = registry(&host);
        reg.create_tab("https://b.example");
        reg.create_tab("https://c.example");
        let urls: Vec<String> = reg.tabs().into_iter().map(|t| t.url).collect();
        assert_eq!(urls, vec![HOME, "https://b.example", "https://c.example"]);
    }

    #[test]
    fn tab_serializes_for_chrome() {
        let tab = Tab::new(TabId::new(), HOME);
        let json = serde_json::to_value(&tab).unwrap();
        assert_eq!(json["title"], DEFAULT_TITLE);
        assert_eq!(json["url"], HOME);
    }
}
