//! WayfarerApp struct definition and constructor.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use winit::window::Window;

use wayfarer_common::Event;
use wayfarer_config::WayfarerConfig;
use wayfarer_platform::{permissions_file, webview_data_dir, KeybindRegistry};
use wayfarer_tabs::Browser;
use wayfarer_webview::{
    ChromeView, PermissionPolicy, PermissionStore, WebViewConfig, WebViewManager,
};

/// How often webview callbacks are drained (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Top-level application state.
pub struct WayfarerApp {
    pub(super) config: WayfarerConfig,
    pub(super) keybinds: KeybindRegistry,

    pub(super) webviews: WebViewManager,
    pub(super) browser: Browser,
    pub(super) browser_events: broadcast::Receiver<Event>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) chrome: Option<ChromeView>,
    /// Set once the chrome page has loaded its script.
    pub(super) chrome_ready: bool,
    /// Chrome needs a fresh state snapshot.
    pub(super) chrome_dirty: bool,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
}

impl WayfarerApp {
    pub fn new(config: WayfarerConfig, keybinds: KeybindRegistry, start_url: Option<String>) -> Self {
        let data_dir = webview_data_dir(&config.session.partition).unwrap_or_else(|e| {
            tracing::warn!("Session directory unavailable, keeping session in memory: {e}");
            None
        });
        let store = match permissions_file() {
            Ok(path) => PermissionStore::open(path),
            Err(e) => {
                tracing::warn!("Permission store unavailable, decisions will not persist: {e}");
                PermissionStore::in_memory()
            }
        };
        let policy = PermissionPolicy::new(&config.permissions, store);
        let webviews = WebViewManager::new(WebViewConfig::default(), data_dir, policy);

        let browser =
            Browser::with_start_url(&config, Box::new(webviews.factory()), start_url.as_deref());
        let browser_events = browser.subscribe();

        Self {
            config,
            keybinds,
            webviews,
            browser,
            browser_events,
            window: None,
            chrome: None,
            chrome_ready: false,
            chrome_dirty: true,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
        }
    }
}
