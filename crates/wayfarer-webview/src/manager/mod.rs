//! Webview lifecycle management.
//!
//! `WebViewManager` owns what every content view shares: the `wry`
//! web context (one cookie jar per partition), the parent window, the
//! event sink, and the permission policy. It is a cheap handle; the
//! factory handed to the tab core and the app's event loop hold clones.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use wayfarer_common::TabId;
use wayfarer_tabs::ViewEvent;
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebView};

use crate::content::ContentProvider;
use crate::events::{EventSink, HostEvent};
use crate::ipc::{js_resolve_permission, IpcMessage};
use crate::permissions::PermissionPolicy;

mod bounds;
mod chrome;
mod factory;
pub mod handlers;
mod history;
mod lifecycle;
mod page;
mod types;
mod view;

pub use bounds::to_wry_rect;
pub use chrome::ChromeView;
pub use factory::WryViewFactory;
pub use history::NavHistory;
pub use page::{PageState, SharedPage};
pub use types::WebViewConfig;
pub use view::WryView;

/// Window that content views are embedded into.
pub type ParentWindow = Arc<dyn HasWindowHandle>;

/// Events drained from the sink in one pass.
#[derive(Debug, Default)]
pub struct Drained {
    pub views: Vec<ViewEvent>,
    pub chrome: Vec<IpcMessage>,
}

struct Shared {
    events: EventSink,
    config: WebViewConfig,
    /// In-memory partitions get no data directory.
    incognito: bool,
    context: RefCell<WebContext>,
    parent: RefCell<Option<ParentWindow>>,
    content: Arc<ContentProvider>,
    permissions: Arc<Mutex<PermissionPolicy>>,
    pages: RefCell<HashMap<TabId, Weak<WebView>>>,
}

#[derive(Clone)]
pub struct WebViewManager {
    shared: Rc<Shared>,
}

impl WebViewManager {
    /// `data_dir` roots the shared web context; `None` keeps the session
    /// in memory.
    pub fn new(
        config: WebViewConfig,
        data_dir: Option<PathBuf>,
        permissions: PermissionPolicy,
    ) -> Self {
        let incognito = data_dir.is_none();
        info!(data_dir = ?data_dir, incognito, "webview context created");
        Self {
            shared: Rc::new(Shared {
                events: EventSink::new(),
                config,
                incognito,
                context: RefCell::new(WebContext::new(data_dir)),
                parent: RefCell::new(None),
                content: Arc::new(ContentProvider::bundled()),
                permissions: Arc::new(Mutex::new(permissions)),
                pages: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Set the window views are created in. Until this is called the
    /// factory reports `NotReady`.
    pub fn set_parent(&self, window: ParentWindow) {
        *self.shared.parent.borrow_mut() = Some(window);
        debug!("webview parent window set");
    }

    /// Factory for the tab registry.
    pub fn factory(&self) -> WryViewFactory {
        WryViewFactory::new(self.clone())
    }

    /// Number of content views still alive.
    pub fn live_views(&self) -> usize {
        self.shared
            .pages
            .borrow()
            .values()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Drain buffered events. Permission requests are answered here and
    /// never reach the caller.
    pub fn drain_events(&self) -> Drained {
        let mut drained = Drained::default();
        for event in self.shared.events.drain() {
            match event {
                HostEvent::View(view) => drained.views.push(view),
                HostEvent::Chrome(body) => match IpcMessage::from_json(&body) {
                    Some(msg) => drained.chrome.push(msg),
                    None => warn!(body_len = body.len(), "chrome IPC rejected: invalid JSON"),
                },
                HostEvent::Permission {
                    tab,
                    request_id,
                    kind,
                    origin,
                } => self.answer_permission(tab, request_id, &kind, &origin),
            }
        }
        self.shared
            .pages
            .borrow_mut()
            .retain(|_, page| page.strong_count() > 0);
        drained
    }

    fn answer_permission(&self, tab: TabId, request_id: u64, kind: &str, origin: &str) {
        let granted = handlers::decide_permission(&self.shared.permissions, origin, kind);
        info!(tab = %tab, kind, origin, granted, "permission request");

        let webview = self.shared.pages.borrow().get(&tab).and_then(Weak::upgrade);
        let Some(webview) = webview else {
            debug!(tab = %tab, "permission answer dropped: view gone");
            return;
        };
        if let Err(e) = webview.evaluate_script(&js_resolve_permission(request_id, granted)) {
            warn!(tab = %tab, error = %e, "failed to deliver permission answer");
        }
    }
}
