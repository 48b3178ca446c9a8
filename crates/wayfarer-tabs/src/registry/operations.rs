//! Tab lifecycle: create, activate, close, and metadata updates.

use wayfarer_common::{Rect, TabId};

use super::types::{LoadUpdate, Tab, TabRegistry, TabSlot};
use crate::view::{ContentView, ViewSpec};

impl TabRegistry {
    /// Open a tab at `url` and make it active.
    ///
    /// If the host cannot create a view yet the tab is still added with an
    /// empty view slot; see [`attach_pending_views`](Self::attach_pending_views).
    pub fn create_tab(&mut self, url: &str) -> TabId {
        self.create_tab_from(url, None)
    }

    /// [`create_tab`](Self::create_tab) on behalf of `opener`. Only tabs
    /// opened this way may be closed by their own page.
    pub fn create_tab_from(&mut self, url: &str, opener: Option<TabId>) -> TabId {
        let id = TabId::new();
        let view = self.build_view(id, url);
        self.slots.push(TabSlot {
            tab: Tab::new(id, url),
            view,
            opener,
        });
        self.show_only(id);
        self.active = Some(id);
        self.address_bar = url.to_string();
        tracing::info!(tab = %id, url, "tab created");
        id
    }

    /// Make `id` the active tab. Unknown ids return `false`.
    pub fn activate_tab(&mut self, id: TabId) -> bool {
        if !self.contains(id) {
            tracing::debug!(tab = %id, "activate: unknown tab");
            return false;
        }
        self.show_only(id);
        self.active = Some(id);
        self.sync_address_bar();
        tracing::debug!(tab = %id, "tab activated");
        true
    }

    /// Remove `id` and destroy its view.
    ///
    /// Closing the active tab activates the tab that slides into its index,
    /// or the new last tab. Closing the only tab opens a default one.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(tab = %id, "close: unknown tab");
            return false;
        };
        drop(self.slots.remove(index));
        tracing::info!(tab = %id, remaining = self.slots.len(), "tab closed");

        if self.active == Some(id) {
            self.active = None;
            let next = self
                .slots
                .get(index)
                .or_else(|| self.slots.last())
                .map(|s| s.tab.id);
            if let Some(next) = next {
                self.activate_tab(next);
            }
        }

        if self.slots.is_empty() {
            let url = self.default_url.clone();
            self.create_tab(&url);
        }
        true
    }

    /// Merge the provided fields into the tab's metadata.
    pub fn update_from_load_event(&mut self, id: TabId, update: LoadUpdate) -> bool {
        let Some(slot) = self.slot_mut(id) else {
            return false;
        };
        let tab = &mut slot.tab;
        if let Some(title) = update.title {
            tab.title = title;
        }
        if let Some(url) = update.url {
            tab.url = url;
        }
        if let Some(favicon) = update.favicon {
            tab.favicon = favicon;
        }
        true
    }

    /// Pull title and address from the live view.
    ///
    /// A view that is missing, not ready, or reports an empty value leaves
    /// the previous value in place. `fallback_url` is used when the view
    /// cannot report its address.
    pub fn refresh_from_view(&mut self, id: TabId, fallback_url: Option<&str>) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        let (title, url) = match slot.view.as_deref() {
            Some(view) => (view.title().ok(), view.url().ok()),
            None => (None, None),
        };
        let url = url.filter(|u| !u.is_empty()).or_else(|| {
            fallback_url
                .filter(|u| !u.is_empty())
                .map(str::to_string)
        });
        let update = LoadUpdate {
            title: title.filter(|t| !t.is_empty()),
            url,
            favicon: None,
        };
        self.update_from_load_event(id, update)
    }

    /// Retry view creation for tabs that have none. Returns how many
    /// views were attached.
    pub fn attach_pending_views(&mut self) -> usize {
        let pending: Vec<(TabId, String)> = self
            .slots
            .iter()
            .filter(|s| s.view.is_none())
            .map(|s| (s.tab.id, s.tab.url.clone()))
            .collect();

        let mut attached = 0;
        for (id, url) in pending {
            if let Some(view) = self.build_view(id, &url) {
                if let Some(slot) = self.slot_mut(id) {
                    slot.view = Some(view);
                    attached += 1;
                }
            }
        }
        if attached > 0 {
            if let Some(active) = self.active {
                self.show_only(active);
            }
            tracing::debug!(attached, "pending views attached");
        }
        attached
    }

    /// Forward the content-area rectangle to every view, and remember it for
    /// views created later.
    pub fn set_all_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        for slot in &mut self.slots {
            if let Some(view) = slot.view.as_mut() {
                if let Err(e) = view.set_bounds(bounds) {
                    tracing::debug!(tab = %slot.tab.id, error = %e, "set_bounds failed");
                }
            }
        }
    }

    /// Re-read the active view's address into the address bar. An unready
    /// view keeps the last known tab url.
    pub fn sync_address_bar(&mut self) -> &str {
        let address = self.active.and_then(|id| self.slot(id)).map(|slot| {
            slot.view
                .as_deref()
                .and_then(|v| v.url().ok())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| slot.tab.url.clone())
        });
        if let Some(address) = address {
            self.address_bar = address;
        }
        &self.address_bar
    }

    pub fn set_address_bar(&mut self, text: impl Into<String>) {
        self.address_bar = text.into();
    }

    fn build_view(&mut self, id: TabId, url: &str) -> Option<Box<dyn ContentView>> {
        let spec = ViewSpec {
            url: url.to_string(),
            partition: self.partition.clone(),
            allow_popups: true,
        };
        match self.factory.create(id, &spec) {
            Ok(mut view) => {
                if let Err(e) = view.set_zoom_factor(self.default_zoom) {
                    tracing::debug!(tab = %id, error = %e, "initial zoom failed");
                }
                if let Some(bounds) = self.bounds {
                    if let Err(e) = view.set_bounds(bounds) {
                        tracing::debug!(tab = %id, error = %e, "initial set_bounds failed");
                    }
                }
                Some(view)
            }
            Err(e) => {
                tracing::warn!(tab = %id, error = %e, "content view not created; will retry");
                None
            }
        }
    }

    fn show_only(&mut self, id: TabId) {
        for slot in &mut self.slots {
            if let Some(view) = slot.view.as_mut() {
                if let Err(e) = view.set_visible(slot.tab.id == id) {
                    tracing::debug!(tab = %slot.tab.id, error = %e, "set_visible failed");
                }
            }
        }
    }
}
