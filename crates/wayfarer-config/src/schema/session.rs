//! Session, authentication-redirect and permission configuration types.

use serde::{Deserialize, Serialize};

/// Authentication redirect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Delay between an auth tab leaving sign-in pages and the switch back
    /// to its origin tab, so redirect chains can finish (valid range: 0-10000).
    pub settle_delay_ms: u64,
    /// Path appended to a site's origin when no known sign-in page exists.
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 1500,
            login_path: "/login".into(),
        }
    }
}

/// Browsing session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Partition every content view is created in. A `persist:` prefix keeps
    /// cookies on disk across restarts.
    pub partition: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            partition: "persist:main".into(),
        }
    }
}

/// Site permission handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    /// Permission kinds granted without consulting the store.
    pub auto_approve: Vec<String>,
    /// Decision recorded the first time an origin asks for anything else.
    pub default_allow: bool,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            auto_approve: vec![
                "notifications".into(),
                "fullscreen".into(),
                "clipboard-read".into(),
                "clipboard-write".into(),
                "popup".into(),
            ],
            default_allow: true,
        }
    }
}
