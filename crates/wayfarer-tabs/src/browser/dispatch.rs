use wayfarer_common::{Action, Event};

use super::Browser;
use crate::registry::LoadUpdate;
use crate::view::{ContentView, ViewError};

impl Browser {
    /// Route a user action to the registry or the active content view.
    ///
    /// View-level actions without an active view do nothing.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.label(), "dispatch");
        if action.needs_active_view() && self.registry.active_view().is_none() {
            tracing::debug!(action = action.label(), "no active content view");
            return;
        }
        let zoom = self.zoom;

        match action {
            Action::NewTab => {
                let home = self.registry.default_url().to_string();
                self.open_tab(&home);
            }
            Action::CloseActiveTab => {
                if let Some(id) = self.registry.active_id() {
                    self.close(id);
                }
            }
            Action::CloseTab(id) => {
                self.close(id);
            }
            Action::ActivateTab(id) => {
                self.activate(id);
            }
            Action::SwitchToTab(ordinal) => {
                if let Some(id) = self.registry.tab_at_ordinal(ordinal as usize) {
                    self.activate(id);
                }
            }
            Action::SwitchToLastTab => {
                if let Some(id) = self.registry.last_tab() {
                    self.activate(id);
                }
            }
            Action::Navigate(text) => self.navigate(&text),
            Action::GoBack => self.with_active_view("back", |view| {
                if view.can_go_back() {
                    view.back()?;
                }
                Ok(())
            }),
            Action::GoForward => self.with_active_view("forward", |view| {
                if view.can_go_forward() {
                    view.forward()?;
                }
                Ok(())
            }),
            Action::Reload => self.with_active_view("reload", |view| view.reload()),
            Action::ReloadIgnoringCache => {
                self.with_active_view("hard reload", |view| view.reload_ignoring_cache())
            }
            Action::ZoomIn => self.with_active_view("zoom in", |view| {
                view.set_zoom_factor(zoom.zoom_in(view.zoom_factor()))
            }),
            Action::ZoomOut => self.with_active_view("zoom out", |view| {
                view.set_zoom_factor(zoom.zoom_out(view.zoom_factor()))
            }),
            Action::ZoomReset => {
                self.with_active_view("zoom reset", |view| view.set_zoom_factor(zoom.reset()))
            }
            Action::FocusAddressBar => self.publish(Event::FocusAddressBar),
            Action::ToggleSidebar => {
                let visible = self.sidebar.toggle();
                self.publish(Event::SidebarToggled { visible });
            }
            Action::SwitchAccount => self.switch_account(),
            Action::None => {}
        }
    }

    fn with_active_view(
        &mut self,
        what: &str,
        f: impl FnOnce(&mut dyn ContentView) -> Result<(), ViewError>,
    ) {
        let Some(view) = self.registry.active_view_mut() else {
            tracing::debug!(what, "no active content view");
            return;
        };
        if let Err(e) = f(view) {
            tracing::warn!(what, error = %e, "content view command failed");
        }
    }

    /// Load address-bar input into the active tab.
    fn navigate(&mut self, text: &str) {
        let Some(id) = self.registry.active_id() else {
            return;
        };
        let url = self.classifier.classify_input(text);
        let Some(view) = self.registry.active_view_mut() else {
            tracing::debug!(tab = %id, "navigate: no active content view");
            return;
        };
        if let Err(e) = view.load_url(&url) {
            tracing::warn!(tab = %id, url = %url, error = %e, "navigation failed");
            return;
        }
        self.registry.update_from_load_event(
            id,
            LoadUpdate {
                url: Some(url.clone()),
                ..Default::default()
            },
        );
        self.registry.set_address_bar(url);
        self.publish_address_bar();
        self.publish(Event::TabUpdated(id));
    }

    /// Open the sign-in page for the active tab's site and track it.
    fn switch_account(&mut self) {
        let Some(origin) = self.registry.active_id() else {
            return;
        };
        let Some(view) = self.registry.active_view() else {
            tracing::debug!(tab = %origin, "switch account: no active content view");
            return;
        };
        let current = view
            .url()
            .ok()
            .filter(|u| !u.is_empty())
            .or_else(|| self.registry.active_tab().map(|t| t.url.clone()));
        let Some(current) = current else {
            return;
        };

        match self.resolver.resolve(&current) {
            Some(auth_url) => {
                tracing::info!(tab = %origin, url = %auth_url, "opening sign-in tab");
                self.open_auth_tab(&auth_url, origin);
            }
            None => tracing::debug!(tab = %origin, url = %current, "no sign-in page for url"),
        }
    }
}
