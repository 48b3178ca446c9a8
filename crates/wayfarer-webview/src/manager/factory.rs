use wayfarer_common::TabId;
use wayfarer_tabs::{ContentView, ViewError, ViewFactory, ViewSpec};

use super::WebViewManager;

/// [`ViewFactory`] backed by `wry`.
pub struct WryViewFactory {
    manager: WebViewManager,
}

impl WryViewFactory {
    pub fn new(manager: WebViewManager) -> Self {
        Self { manager }
    }
}

impl ViewFactory for WryViewFactory {
    fn create(&mut self, tab: TabId, spec: &ViewSpec) -> Result<Box<dyn ContentView>, ViewError> {
        let view = self.manager.create_content_view(tab, spec)?;
        Ok(Box::new(view))
    }
}
