//! Configuration schema types for Wayfarer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the shipped behavior.

mod general;
mod keybind_config;
mod session;
mod sidebar;
mod system;
mod zoom;

pub use general::*;
pub use keybind_config::*;
pub use session::*;
pub use sidebar::*;
pub use system::*;
pub use zoom::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Wayfarer.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfarerConfig {
    pub general: GeneralConfig,
    pub window: WindowConfig,
    pub sidebar: SidebarConfig,
    pub zoom: ZoomConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub permissions: PermissionsConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}
