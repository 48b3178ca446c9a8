//! General browsing and window configuration types.

use serde::{Deserialize, Serialize};

/// Home page and address-bar search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Page opened for new tabs and for the tab that replaces the last closed one.
    pub home_url: String,
    /// Prefix that percent-encoded search terms are appended to.
    pub search_url: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            home_url: "https://google.com".into(),
            search_url: "https://www.google.com/search?q=".into(),
        }
    }
}

/// Main window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 400-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 300-4320).
    pub height: u32,
    /// Height of the navigation bar above the content area (valid range: 24-120).
    pub nav_bar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wayfarer".into(),
            width: 1200,
            height: 800,
            nav_bar_height: 44,
        }
    }
}
