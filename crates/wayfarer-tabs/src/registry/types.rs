use serde::{Deserialize, Serialize};

use wayfarer_common::{Rect, TabId};

use crate::view::{ContentView, ViewFactory};

pub const DEFAULT_TITLE: &str = "New Tab";

/// Grey circle shown until a page reports its own favicon.
pub const DEFAULT_FAVICON: &str = "data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 16 16\" width=\"16\" height=\"16\"><circle cx=\"8\" cy=\"8\" r=\"8\" fill=\"%23ddd\"/></svg>";

/// Metadata for one browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub favicon: String,
}

impl Tab {
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            url: url.into(),
            favicon: DEFAULT_FAVICON.to_string(),
        }
    }
}

/// Partial tab metadata reported by a content view. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<String>,
}

/// A tab and its view. `view` is `None` while the host cannot create it.
pub(super) struct TabSlot {
    pub(super) tab: Tab,
    pub(super) view: Option<Box<dyn ContentView>>,
    /// Tab whose page asked for this one, if any.
    pub(super) opener: Option<TabId>,
}

/// Ordered tabs plus the active one.
///
/// Never observably empty: construction opens a default tab and closing the
/// last tab opens a fresh one.
pub struct TabRegistry {
    pub(super) slots: Vec<TabSlot>,
    pub(super) active: Option<TabId>,
    pub(super) factory: Box<dyn ViewFactory>,
    pub(super) partition: String,
    pub(super) default_url: String,
    pub(super) default_zoom: f64,
    pub(super) address_bar: String,
    pub(super) bounds: Option<Rect>,
}

impl TabRegistry {
    /// Create a registry and open the first tab at `start_url`. Every view
    /// starts at `default_zoom`.
    pub fn new(
        factory: Box<dyn ViewFactory>,
        partition: impl Into<String>,
        default_url: impl Into<String>,
        default_zoom: f64,
        start_url: &str,
    ) -> Self {
        let mut registry = Self {
            slots: Vec::new(),
            active: None,
            factory,
            partition: partition.into(),
            default_url: default_url.into(),
            default_zoom,
            address_bar: String::new(),
            bounds: None,
        };
        registry.create_tab(start_url);
        registry
    }

    // -- Accessors --

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> Vec<Tab> {
        self.slots.iter().map(|s| s.tab.clone()).collect()
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.slot(id).map(|s| &s.tab)
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab(self.active?)
    }

    pub fn active_view(&self) -> Option<&dyn ContentView> {
        self.view(self.active?)
    }

    pub fn active_view_mut(&mut self) -> Option<&mut dyn ContentView> {
        let id = self.active?;
        self.view_mut(id)
    }

    pub fn view(&self, id: TabId) -> Option<&dyn ContentView> {
        self.slot(id)?.view.as_deref()
    }

    pub fn view_mut(&mut self, id: TabId) -> Option<&mut dyn ContentView> {
        let view = self.slot_mut(id)?.view.as_mut()?;
        Some(&mut **view)
    }

    pub fn has_view(&self, id: TabId) -> bool {
        self.view(id).is_some()
    }

    /// The tab that opened `id` (popup or sign-in tab), if any.
    pub fn opener(&self, id: TabId) -> Option<TabId> {
        self.slot(id)?.opener
    }

    /// Tab at a 1-based position. `0` and positions past the end are `None`.
    pub fn tab_at_ordinal(&self, ordinal: usize) -> Option<TabId> {
        let index = ordinal.checked_sub(1)?;
        self.slots.get(index).map(|s| s.tab.id)
    }

    pub fn last_tab(&self) -> Option<TabId> {
        self.slots.last().map(|s| s.tab.id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.slots.iter().position(|s| s.tab.id == id)
    }

    /// What the address bar should display for the active tab.
    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    pub(super) fn slot(&self, id: TabId) -> Option<&TabSlot> {
        self.slots.iter().find(|s| s.tab.id == id)
    }

    pub(super) fn slot_mut(&mut self, id: TabId) -> Option<&mut TabSlot> {
        self.slots.iter_mut().find(|s| s.tab.id == id)
    }
}
