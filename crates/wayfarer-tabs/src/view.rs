//! The boundary between the tab core and whatever hosts web content.

use wayfarer_common::{Rect, TabId};

/// Errors reported by a content view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The view exists but cannot answer yet (page not committed, host
    /// window not created). Callers keep their previous value.
    #[error("content view not ready")]
    NotReady,

    #[error("content view backend error: {0}")]
    Backend(String),
}

/// Everything a host needs to create a content view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSpec {
    /// Initial address.
    pub url: String,
    /// Session partition. Identical for every view so cookies are shared.
    pub partition: String,
    pub allow_popups: bool,
}

/// An isolated browsing surface owned by exactly one tab.
///
/// Navigation history lives inside the view; the core only asks about it.
pub trait ContentView {
    fn back(&mut self) -> Result<(), ViewError>;
    fn forward(&mut self) -> Result<(), ViewError>;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn reload(&mut self) -> Result<(), ViewError>;
    fn reload_ignoring_cache(&mut self) -> Result<(), ViewError>;
    fn zoom_factor(&self) -> f64;
    fn set_zoom_factor(&mut self, factor: f64) -> Result<(), ViewError>;
    /// Live address of the page. May fail with [`ViewError::NotReady`].
    fn url(&self) -> Result<String, ViewError>;
    /// Live document title. May fail with [`ViewError::NotReady`].
    fn title(&self) -> Result<String, ViewError>;
    fn load_url(&mut self, url: &str) -> Result<(), ViewError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError>;
    fn set_bounds(&mut self, bounds: Rect) -> Result<(), ViewError>;
}

/// Creates content views on behalf of the tab registry.
pub trait ViewFactory {
    fn create(&mut self, tab: TabId, spec: &ViewSpec) -> Result<Box<dyn ContentView>, ViewError>;
}

/// How a page asked for a new window to be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    ForegroundTab,
    BackgroundTab,
    #[default]
    NewWindow,
    Other,
}

impl Disposition {
    /// Parse the tag reported by the host. Unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "foreground-tab" => Self::ForegroundTab,
            "background-tab" => Self::BackgroundTab,
            "new-window" => Self::NewWindow,
            _ => Self::Other,
        }
    }
}

/// Lifecycle notifications emitted by content views.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    LoadStarted {
        tab: TabId,
    },
    LoadStopped {
        tab: TabId,
        url: String,
    },
    TitleChanged {
        tab: TabId,
        title: String,
    },
    /// Candidate favicon URIs in page order.
    FaviconUpdated {
        tab: TabId,
        favicons: Vec<String>,
    },
    NewWindow {
        tab: TabId,
        url: String,
        disposition: Disposition,
    },
    Navigated {
        tab: TabId,
        url: String,
        same_document: bool,
    },
    /// The page closed itself (`window.close()`).
    Closed {
        tab: TabId,
    },
    /// Raw IPC body the host did not translate.
    Ipc {
        tab: TabId,
        body: String,
    },
}

impl ViewEvent {
    /// The tab that emitted this event.
    pub fn tab(&self) -> TabId {
        match self {
            Self::LoadStarted { tab }
            | Self::LoadStopped { tab, .. }
            | Self::TitleChanged { tab, .. }
            | Self::FaviconUpdated { tab, .. }
            | Self::NewWindow { tab, .. }
            | Self::Navigated { tab, .. }
            | Self::Closed { tab }
            | Self::Ipc { tab, .. } => *tab,
        }
    }
}
