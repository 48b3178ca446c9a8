use tracing::trace;
use wayfarer_common::{Rect, WayfarerError};
use wry::WebView;

use crate::ipc::js_dispatch_message;

use super::bounds::to_wry_rect;

/// The browser UI: sidebar tab list and navigation bar.
pub struct ChromeView {
    webview: WebView,
}

impl ChromeView {
    pub(super) fn new(webview: WebView) -> Self {
        Self { webview }
    }

    /// Deliver a message to a `window.wayfarer.ipc.on(kind, ..)` handler.
    pub fn send(&self, kind: &str, payload: &serde_json::Value) -> Result<(), WayfarerError> {
        trace!(kind, "chrome message");
        self.webview
            .evaluate_script(&js_dispatch_message(kind, payload))
            .map_err(|e| WayfarerError::WebView(e.to_string()))
    }

    pub fn set_bounds(&self, bounds: Rect) -> Result<(), WayfarerError> {
        self.webview
            .set_bounds(to_wry_rect(bounds))
            .map_err(|e| WayfarerError::WebView(e.to_string()))
    }

    pub fn focus(&self) -> Result<(), WayfarerError> {
        self.webview
            .focus()
            .map_err(|e| WayfarerError::WebView(e.to_string()))
    }
}
