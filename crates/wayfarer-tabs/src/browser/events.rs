use std::time::Instant;

use wayfarer_common::Event;

use super::Browser;
use crate::classify::looks_like_auth_url;
use crate::registry::LoadUpdate;
use crate::scheduler::DeferredTask;
use crate::view::ViewEvent;

impl Browser {
    /// Apply a content-view notification. Events from tabs that no longer
    /// exist are dropped.
    pub fn handle_view_event(&mut self, event: ViewEvent, now: Instant) {
        let tab = event.tab();
        if !self.registry.contains(tab) {
            tracing::trace!(%tab, ?event, "event for unknown tab");
            return;
        }
        let is_active = self.registry.active_id() == Some(tab);

        match event {
            ViewEvent::LoadStarted { .. } => {
                tracing::trace!(%tab, "load started");
            }
            ViewEvent::LoadStopped { tab, url } => {
                self.registry.refresh_from_view(tab, Some(&url));
                if is_active {
                    self.registry.sync_address_bar();
                    self.publish_address_bar();
                }
                self.publish(Event::TabUpdated(tab));
            }
            ViewEvent::TitleChanged { tab, title } => {
                if title.is_empty() {
                    return;
                }
                let update = LoadUpdate {
                    title: Some(title),
                    ..Default::default()
                };
                self.registry.update_from_load_event(tab, update);
                self.publish(Event::TabUpdated(tab));
            }
            ViewEvent::FaviconUpdated { tab, favicons } => {
                let Some(favicon) = favicons.into_iter().find(|f| !f.is_empty()) else {
                    return;
                };
                let update = LoadUpdate {
                    favicon: Some(favicon),
                    ..Default::default()
                };
                self.registry.update_from_load_event(tab, update);
                self.publish(Event::TabUpdated(tab));
            }
            ViewEvent::NewWindow {
                tab,
                url,
                disposition,
            } => {
                tracing::debug!(%tab, url = %url, ?disposition, "new window requested");
                if looks_like_auth_url(&url) {
                    self.open_auth_tab(&url, tab);
                } else {
                    self.open_tab_from(&url, Some(tab));
                }
            }
            ViewEvent::Navigated {
                tab,
                url,
                same_document,
            } => {
                if same_document {
                    let update = LoadUpdate {
                        url: Some(url.clone()),
                        ..Default::default()
                    };
                    self.registry.update_from_load_event(tab, update);
                }
                if is_active {
                    self.registry.set_address_bar(url.as_str());
                    self.publish_address_bar();
                }
                if let Some(resolution) = self.tracker.on_navigation(tab, &url) {
                    let task = DeferredTask::ReturnToOrigin {
                        auth: resolution.auth,
                        origin: resolution.origin,
                    };
                    self.scheduler.schedule(task, now + self.settle_delay);
                    self.publish(Event::AuthResolved {
                        auth: resolution.auth,
                        origin: resolution.origin,
                    });
                }
            }
            ViewEvent::Closed { tab } => {
                if self.registry.opener(tab).is_none() {
                    tracing::debug!(%tab, "window.close ignored for user-opened tab");
                    return;
                }
                self.close(tab);
            }
            ViewEvent::Ipc { tab, body } => {
                tracing::trace!(%tab, len = body.len(), "unhandled view ipc");
            }
        }
    }
}
