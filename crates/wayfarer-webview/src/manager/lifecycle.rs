use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;
use wayfarer_common::{Rect, TabId, WayfarerError};
use wayfarer_tabs::{ViewError, ViewSpec};
use wry::WebViewBuilder;

use crate::content::{CHROME_URL, SCHEME};
use crate::events::HostEvent;
use crate::ipc::{CHROME_INIT_SCRIPT, PAGE_BRIDGE_SCRIPT};

use super::bounds::to_wry_rect;
use super::chrome::ChromeView;
use super::page::SharedPage;
use super::view::{backend_error, WryView};
use super::WebViewManager;

impl WebViewManager {
    /// Build a hidden content view for `tab` inside the shared web context.
    pub(super) fn create_content_view(
        &self,
        tab: TabId,
        spec: &ViewSpec,
    ) -> Result<WryView, ViewError> {
        let parent = self.shared.parent.borrow().clone().ok_or(ViewError::NotReady)?;
        let config = &self.shared.config;
        let events = self.shared.events.clone();
        let page = SharedPage::default();

        let mut context = self.shared.context.borrow_mut();
        let mut builder = WebViewBuilder::with_web_context(&mut context)
            .with_url(&spec.url)
            .with_visible(false)
            .with_focused(false)
            .with_incognito(self.shared.incognito)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_initialization_script(PAGE_BRIDGE_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, events.clone(), page.clone(), tab);
        builder = Self::attach_page_load_handler(builder, events.clone(), page.clone(), tab);
        builder = Self::attach_title_handler(builder, events.clone(), page.clone(), tab);
        builder = Self::attach_navigation_handler(builder, events.clone(), tab);
        builder = Self::attach_new_window_handler(
            builder,
            events,
            page.clone(),
            Arc::clone(&self.shared.permissions),
            tab,
            spec.allow_popups,
        );

        let webview = Rc::new(builder.build_as_child(&parent).map_err(backend_error)?);
        drop(context);

        self.shared
            .pages
            .borrow_mut()
            .insert(tab, Rc::downgrade(&webview));
        debug!(tab = %tab, url = %spec.url, partition = %spec.partition, "content view created");
        Ok(WryView::new(tab, webview, page))
    }

    /// Build the chrome view (sidebar and navigation bar) served from the
    /// bundled assets.
    pub fn create_chrome(&self, bounds: Rect) -> Result<ChromeView, WayfarerError> {
        let parent = self
            .shared
            .parent
            .borrow()
            .clone()
            .ok_or_else(|| WayfarerError::WebView("no parent window".into()))?;
        let content = Arc::clone(&self.shared.content);
        let events = self.shared.events.clone();

        let webview = WebViewBuilder::new()
            .with_bounds(to_wry_rect(bounds))
            .with_devtools(self.shared.config.devtools)
            .with_initialization_script(CHROME_INIT_SCRIPT)
            .with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
                content.respond(&request.uri().to_string())
            })
            .with_ipc_handler(move |request| {
                events.push(HostEvent::Chrome(request.body().to_string()));
            })
            .with_url(CHROME_URL)
            .build_as_child(&parent)
            .map_err(|e| WayfarerError::WebView(e.to_string()))?;

        debug!(url = CHROME_URL, "chrome view created");
        Ok(ChromeView::new(webview))
    }
}
