use std::sync::{Arc, Mutex};

use tracing::{debug, trace, warn};
use wayfarer_common::TabId;
use wayfarer_tabs::{Disposition, ViewEvent};
use wry::WebViewBuilder;

use crate::events::{EventSink, HostEvent, PageLoadState};
use crate::ipc::{IpcMessage, PageMessage};
use crate::permissions::PermissionPolicy;

use super::page::SharedPage;
use super::WebViewManager;

/// Permission kind consulted before a page may open a window.
pub const POPUP_PERMISSION: &str = "popup";

/// Ask the policy, treating a poisoned lock as a denial.
pub(super) fn decide_permission(
    policy: &Mutex<PermissionPolicy>,
    origin: &str,
    kind: &str,
) -> bool {
    match policy.lock() {
        Ok(mut policy) => policy.decide(origin, kind),
        Err(_) => false,
    }
}

/// Translate one bridge message into a host event.
pub(super) fn page_message_event(
    tab: TabId,
    page: &SharedPage,
    body: &str,
    msg: &IpcMessage,
) -> HostEvent {
    match PageMessage::parse(msg) {
        Some(PageMessage::Favicons(favicons)) => {
            HostEvent::View(ViewEvent::FaviconUpdated { tab, favicons })
        }
        Some(PageMessage::Navigated { url, replace }) => {
            let mut state = page.lock();
            if replace {
                state.history.replace(&url);
            } else {
                state.history.commit(&url);
            }
            HostEvent::View(ViewEvent::Navigated {
                tab,
                url,
                same_document: true,
            })
        }
        Some(PageMessage::Traversed { url }) => {
            page.lock().history.traverse(&url);
            HostEvent::View(ViewEvent::Navigated {
                tab,
                url,
                same_document: true,
            })
        }
        Some(PageMessage::Close) => HostEvent::View(ViewEvent::Closed { tab }),
        Some(PageMessage::Permission { id, kind, origin }) => HostEvent::Permission {
            tab,
            request_id: id,
            kind,
            origin,
        },
        Some(PageMessage::Shortcut(_)) | None => HostEvent::View(ViewEvent::Ipc {
            tab,
            body: body.to_string(),
        }),
    }
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        page: SharedPage,
        tab: TabId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            let Some(msg) = IpcMessage::from_json(body) else {
                warn!(tab = %tab, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            };
            trace!(tab = %tab, kind = %msg.kind, "IPC message from page");
            events.push(page_message_event(tab, &page, body, &msg));
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        page: SharedPage,
        tab: TabId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(tab = %tab, ?state, url = %url, "page load");
            match state {
                PageLoadState::Started => events.push_view(ViewEvent::LoadStarted { tab }),
                PageLoadState::Finished => {
                    page.lock().history.commit(&url);
                    events.push_view(ViewEvent::LoadStopped { tab, url });
                }
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        page: SharedPage,
        tab: TabId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(tab = %tab, title = %title, "title changed");
            page.lock().title = title.clone();
            events.push_view(ViewEvent::TitleChanged { tab, title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        tab: TabId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            debug!(tab = %tab, url = %url, "navigation");
            events.push_view(ViewEvent::Navigated {
                tab,
                url,
                same_document: false,
            });
            true
        })
    }

    /// Popups never get a native window; allowed ones become tabs.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        page: SharedPage,
        policy: Arc<Mutex<PermissionPolicy>>,
        tab: TabId,
        allow_popups: bool,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            let origin = page.lock().origin().unwrap_or_else(|| "null".to_string());
            let allowed = allow_popups && decide_permission(&policy, &origin, POPUP_PERMISSION);
            if allowed {
                debug!(tab = %tab, url = %url, "new window request");
                events.push_view(ViewEvent::NewWindow {
                    tab,
                    url,
                    disposition: Disposition::default(),
                });
            } else {
                debug!(tab = %tab, url = %url, origin = %origin, "popup blocked");
            }
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::PermissionStore;
    use serde_json::json;
    use wayfarer_config::schema::PermissionsConfig;

    fn event_for(page: &SharedPage, tab: TabId, msg: IpcMessage) -> HostEvent {
        let body = serde_json::to_string(&msg).unwrap();
        page_message_event(tab, page, &body, &msg)
    }

    #[test]
    fn same_document_navigation_updates_history() {
        let page = SharedPage::default();
        let tab = TabId::new();
        page.lock().history.commit("https://app.example.com/");

        let event = event_for(
            &page,
            tab,
            IpcMessage::json("navigated", json!({"url": "https://app.example.com/#inbox"})),
        );

        assert_eq!(
            event,
            HostEvent::View(ViewEvent::Navigated {
                tab,
                url: "https://app.example.com/#inbox".into(),
                same_document: true,
            })
        );
        assert!(page.lock().history.can_go_back());
    }

    #[test]
    fn replace_state_does_not_grow_history() {
        let page = SharedPage::default();
        let tab = TabId::new();
        page.lock().history.commit("https://app.example.com/");

        event_for(
            &page,
            tab,
            IpcMessage::json("navigated", json!({"url": "https://app.example.com/?q=1", "replace": true})),
        );

        let state = page.lock();
        assert!(!state.history.can_go_back());
        assert_eq!(state.history.current(), Some("https://app.example.com/?q=1"));
    }

    #[test]
    fn favicons_and_close_map_to_view_events() {
        let page = SharedPage::default();
        let tab = TabId::new();

        let event = event_for(&page, tab, IpcMessage::json("favicons", json!(["https://a/f.ico"])));
        assert_eq!(
            event,
            HostEvent::View(ViewEvent::FaviconUpdated {
                tab,
                favicons: vec!["https://a/f.ico".into()],
            })
        );

        let close: IpcMessage = serde_json::from_value(json!({"kind": "close"})).unwrap();
        assert_eq!(
            event_for(&page, tab, close),
            HostEvent::View(ViewEvent::Closed { tab })
        );
    }

    #[test]
    fn permission_request_is_host_event() {
        let page = SharedPage::default();
        let tab = TabId::new();
        let event = event_for(
            &page,
            tab,
            IpcMessage::json(
                "permission",
                json!({"id": 1, "kind": "geolocation", "origin": "https://maps.example.com"}),
            ),
        );
        assert_eq!(
            event,
            HostEvent::Permission {
                tab,
                request_id: 1,
                kind: "geolocation".into(),
                origin: "https://maps.example.com".into(),
            }
        );
    }

    #[test]
    fn geolocation_answer_is_remembered_per_origin() {
        let page = SharedPage::default();
        let tab = TabId::new();
        let event = event_for(
            &page,
            tab,
            IpcMessage::json(
                "permission",
                json!({"id": 4, "kind": "geolocation", "origin": "https://maps.example.com"}),
            ),
        );
        let HostEvent::Permission { kind, origin, .. } = event else {
            panic!("expected a permission event");
        };

        let mut store = PermissionStore::in_memory();
        store
            .set("permission.geolocation.https://blocked.example.com", false)
            .unwrap();
        let policy = Mutex::new(PermissionPolicy::new(&PermissionsConfig::default(), store));

        assert!(decide_permission(&policy, &origin, &kind));
        assert!(!decide_permission(&policy, "https://blocked.example.com", &kind));
        let policy = policy.lock().unwrap();
        assert_eq!(
            policy
                .store()
                .get("permission.geolocation.https://maps.example.com"),
            Some(true)
        );
    }

    #[test]
    fn page_back_moves_history_instead_of_pushing() {
        let page = SharedPage::default();
        let tab = TabId::new();
        {
            let mut state = page.lock();
            state.history.commit("https://app.example.com/a");
            state.history.commit("https://app.example.com/b");
        }

        let event = event_for(
            &page,
            tab,
            IpcMessage::json("traversed", json!({"url": "https://app.example.com/a"})),
        );

        assert!(matches!(
            event,
            HostEvent::View(ViewEvent::Navigated { same_document: true, .. })
        ));
        let state = page.lock();
        assert_eq!(state.history.current(), Some("https://app.example.com/a"));
        assert!(state.history.can_go_forward());
    }

    #[test]
    fn shortcuts_and_unknown_kinds_pass_through_raw() {
        let page = SharedPage::default();
        let tab = TabId::new();
        let msg = IpcMessage::json("shortcut", json!({"key": "t", "ctrl": true}));
        let body = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            page_message_event(tab, &page, &body, &msg),
            HostEvent::View(ViewEvent::Ipc { tab, body: body.clone() })
        );

        let custom = IpcMessage::text("custom", "x");
        assert!(matches!(
            event_for(&page, tab, custom),
            HostEvent::View(ViewEvent::Ipc { .. })
        ));
    }
}
