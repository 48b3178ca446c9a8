use serde::{Deserialize, Serialize};

/// Tab sidebar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub visible: bool,
    /// Initial width in logical pixels; must lie within `[min_width, max_width]`.
    pub width: u32,
    pub min_width: u32,
    pub max_width: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            visible: true,
            width: 250,
            min_width: 200,
            max_width: 500,
        }
    }
}
