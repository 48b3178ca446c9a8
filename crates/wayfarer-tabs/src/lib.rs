//! Tab and session core for Wayfarer.
//!
//! Everything here is host-agnostic: content views are reached through the
//! [`ContentView`] and [`ViewFactory`] traits so the state machine can be
//! driven by a real webview backend or by a test double.

pub mod auth;
pub mod browser;
pub mod classify;
pub mod registry;
pub mod scheduler;
pub mod sidebar;
pub mod view;
pub mod zoom;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{resolve_auth_url, AuthResolution, AuthResolver, AuthRule, AuthTracker};
pub use browser::Browser;
pub use classify::{looks_like_auth_url, InputClassifier};
pub use registry::{LoadUpdate, Tab, TabRegistry, DEFAULT_FAVICON, DEFAULT_TITLE};
pub use scheduler::{DeferredTask, Scheduler, TaskId};
pub use sidebar::SidebarState;
pub use view::{ContentView, Disposition, ViewError, ViewEvent, ViewFactory, ViewSpec};
pub use zoom::ZoomPolicy;
