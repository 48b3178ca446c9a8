use std::rc::Rc;

use tracing::debug;
use wayfarer_common::{Rect, TabId};
use wayfarer_tabs::{ContentView, ViewError};
use wry::WebView;

use super::bounds::to_wry_rect;
use super::page::SharedPage;

pub(super) fn backend_error(e: wry::Error) -> ViewError {
    ViewError::Backend(e.to_string())
}

/// A tab's content view. Dropping it destroys the native webview.
pub struct WryView {
    tab: TabId,
    webview: Rc<WebView>,
    page: SharedPage,
    zoom: f64,
}

impl WryView {
    pub(super) fn new(tab: TabId, webview: Rc<WebView>, page: SharedPage) -> Self {
        Self {
            tab,
            webview,
            page,
            zoom: 1.0,
        }
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    fn eval(&self, js: &str) -> Result<(), ViewError> {
        self.webview.evaluate_script(js).map_err(backend_error)
    }
}

impl ContentView for WryView {
    fn back(&mut self) -> Result<(), ViewError> {
        self.page.lock().history.begin_back();
        self.eval("history.back();")
    }

    fn forward(&mut self) -> Result<(), ViewError> {
        self.page.lock().history.begin_forward();
        self.eval("history.forward();")
    }

    fn can_go_back(&self) -> bool {
        self.page.lock().history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.page.lock().history.can_go_forward()
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.eval("location.reload();")
    }

    /// Reloads the committed address through a fresh top-level load, which
    /// revalidates the document instead of restoring it from the page cache.
    fn reload_ignoring_cache(&mut self) -> Result<(), ViewError> {
        let url = self.url()?;
        self.webview.load_url(&url).map_err(backend_error)
    }

    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn set_zoom_factor(&mut self, factor: f64) -> Result<(), ViewError> {
        self.webview.zoom(factor).map_err(backend_error)?;
        self.zoom = factor;
        Ok(())
    }

    fn url(&self) -> Result<String, ViewError> {
        let committed = self.page.lock().history.current().map(str::to_string);
        let Some(committed) = committed else {
            return Err(ViewError::NotReady);
        };
        match self.webview.url() {
            Ok(live) if !live.is_empty() => Ok(live),
            Ok(_) => Ok(committed),
            Err(e) => {
                debug!(tab = %self.tab, error = %e, "live url unavailable");
                Ok(committed)
            }
        }
    }

    fn title(&self) -> Result<String, ViewError> {
        let page = self.page.lock();
        if page.history.is_empty() {
            return Err(ViewError::NotReady);
        }
        Ok(page.title.clone())
    }

    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        debug!(tab = %self.tab, url, "load url");
        self.webview.load_url(url).map_err(backend_error)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        self.webview.set_visible(visible).map_err(backend_error)
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), ViewError> {
        self.webview
            .set_bounds(to_wry_rect(bounds))
            .map_err(backend_error)
    }
}
