//! Draining webview callbacks and browser events, and scheduling the
//! next wake-up.

use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use wayfarer_common::{Event, TabId};
use wayfarer_tabs::ViewEvent;
use wayfarer_webview::{IpcMessage, PageMessage};

use super::chrome_state::{button_tooltips, ChromeState};
use super::core::{WayfarerApp, POLL_INTERVAL};
use super::shortcuts::resolve_press;

impl WayfarerApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.poll_webview_events(now);
        let ran = self.browser.tick(now);
        if ran > 0 {
            tracing::debug!(ran, "deferred tasks ran");
        }
        self.poll_browser_events();
        if self.chrome_dirty {
            self.push_chrome_state();
        }

        if self.should_exit {
            event_loop.exit();
            return;
        }

        let mut wake = Instant::now() + POLL_INTERVAL;
        if let Some(deadline) = self.browser.next_deadline() {
            wake = wake.min(deadline);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    fn poll_webview_events(&mut self, now: Instant) {
        let drained = self.webviews.drain_events();
        for msg in drained.chrome {
            self.handle_chrome_message(msg);
        }
        for event in drained.views {
            if let ViewEvent::Ipc { tab, body } = &event {
                self.handle_page_ipc(*tab, body);
                continue;
            }
            self.browser.handle_view_event(event, now);
        }
    }

    /// Bridge messages the webview layer passed through untranslated.
    fn handle_page_ipc(&mut self, tab: TabId, body: &str) {
        let Some(msg) = IpcMessage::from_json(body) else {
            return;
        };
        match PageMessage::parse(&msg) {
            Some(PageMessage::Shortcut(press)) => {
                if let Some(action) = resolve_press(&self.keybinds, &press) {
                    self.dispatch(action);
                }
            }
            _ => tracing::trace!(tab = %tab, kind = %msg.kind, "page IPC ignored"),
        }
    }

    fn poll_browser_events(&mut self) {
        let mut relayout = false;
        let mut retitle = false;
        loop {
            let event = match self.browser_events.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "browser events lagged");
                    self.chrome_dirty = true;
                    relayout = true;
                    retitle = true;
                    continue;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            };

            match event {
                Event::SidebarToggled { .. } | Event::SidebarResized { .. } => relayout = true,
                Event::TabActivated(_) | Event::TabUpdated(_) => retitle = true,
                Event::FocusAddressBar => self.focus_address_bar(),
                Event::AuthStarted { auth, origin } => {
                    tracing::info!(auth = %auth, origin = %origin, "sign-in started");
                }
                Event::AuthResolved { auth, origin } => {
                    tracing::info!(auth = %auth, origin = %origin, "sign-in finished");
                }
                Event::TabOpened(_) | Event::TabClosed(_) | Event::AddressBarChanged(_) => {}
            }
            self.chrome_dirty = true;
        }

        if relayout {
            self.relayout();
        }
        if retitle {
            self.update_window_title();
        }
    }

    fn focus_address_bar(&self) {
        let Some(chrome) = &self.chrome else {
            return;
        };
        if let Err(e) = chrome.focus() {
            tracing::debug!(error = %e, "chrome focus failed");
        }
        if let Err(e) = chrome.send("focus_address", &serde_json::Value::Null) {
            tracing::warn!(error = %e, "Failed to focus address bar");
        }
    }

    fn push_chrome_state(&mut self) {
        if !self.chrome_ready {
            return;
        }
        let Some(chrome) = &self.chrome else {
            return;
        };
        let state = ChromeState::capture(&self.browser, self.config.window.nav_bar_height);
        match chrome.send("state", &state.to_json()) {
            Ok(()) => self.chrome_dirty = false,
            Err(e) => tracing::warn!(error = %e, "Failed to push chrome state"),
        }
        tracing::trace!(live_views = self.webviews.live_views(), "chrome state pushed");
    }

    pub(super) fn send_tooltips(&self) {
        let Some(chrome) = &self.chrome else {
            return;
        };
        let tooltips = serde_json::to_value(button_tooltips(&self.keybinds))
            .unwrap_or(serde_json::Value::Null);
        if let Err(e) = chrome.send("tooltips", &tooltips) {
            tracing::warn!(error = %e, "Failed to send chrome tooltips");
        }
    }
}
