//! `wry` backend for Wayfarer content views.
//!
//! Provides:
//! - [`WebViewManager`]: shared web context, event sink, and the chrome view
//! - [`WryViewFactory`]/[`WryView`]: the `ContentView` port over `wry::WebView`
//! - a page bridge script reporting favicons, history and permission requests
//! - the `wayfarer://` protocol serving bundled chrome assets
//! - a persisted per-origin permission policy

pub mod content;
pub mod csp;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod permissions;

pub use content::ContentProvider;
pub use events::{EventSink, HostEvent, PageLoadState};
pub use ipc::{IpcMessage, IpcPayload, PageMessage, ShortcutPress};
pub use manager::{
    ChromeView, Drained, ParentWindow, WebViewConfig, WebViewManager, WryView, WryViewFactory,
};
pub use permissions::{permission_key, PermissionPolicy, PermissionStore};
