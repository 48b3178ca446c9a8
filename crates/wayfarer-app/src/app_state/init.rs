//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use wayfarer_common::Rect;
use wayfarer_webview::ParentWindow;

use super::core::WayfarerApp;
use super::layout::{chrome_rect, content_rect};

impl WayfarerApp {
    /// Create the window, the chrome view, and any content views that were
    /// waiting for it. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(Arc::clone(&window));

        let parent: ParentWindow = window;
        self.webviews.set_parent(parent);

        let (width, height) = self.logical_size();
        match self.webviews.create_chrome(chrome_rect(width, height)) {
            Ok(chrome) => self.chrome = Some(chrome),
            Err(e) => {
                tracing::error!("Failed to create chrome view: {e}");
                return false;
            }
        }

        let attached = self.browser.attach_pending_views();
        self.relayout();
        tracing::info!(attached, "Window created and webviews initialized");
        true
    }

    /// Inner window size in logical pixels.
    pub(super) fn logical_size(&self) -> (f64, f64) {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                (size.width, size.height)
            }
            None => (0.0, 0.0),
        }
    }

    pub(super) fn content_bounds(&self) -> Rect {
        let (width, height) = self.logical_size();
        content_rect(
            width,
            height,
            self.browser.sidebar().effective_width(),
            self.config.window.nav_bar_height,
        )
    }

    /// Resize the chrome to the window and content views to the area it
    /// leaves free.
    pub(super) fn relayout(&mut self) {
        if self.window.is_none() {
            return;
        }
        let (width, height) = self.logical_size();
        if let Some(chrome) = &self.chrome {
            if let Err(e) = chrome.set_bounds(chrome_rect(width, height)) {
                tracing::warn!(error = %e, "Failed to resize chrome view");
            }
        }
        let bounds = self.content_bounds();
        tracing::debug!(?bounds, "content bounds");
        self.browser.set_content_bounds(bounds);
    }

    /// Reflect the active tab in the window title.
    pub(super) fn update_window_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let base = &self.config.window.title;
        let title = match self.browser.registry().active_tab() {
            Some(tab) if !tab.title.is_empty() => format!("{} - {base}", tab.title),
            _ => base.clone(),
        };
        window.set_title(&title);
    }
}
