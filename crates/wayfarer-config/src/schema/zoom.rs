use serde::{Deserialize, Serialize};

/// Page zoom configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Amount added or removed per zoom step.
    pub step: f64,
    /// Floor for the zoom factor; zooming out never goes below it.
    pub min: f64,
    pub max: f64,
    /// Factor restored by "actual size".
    pub default: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: 0.1,
            min: 0.1,
            max: 5.0,
            default: 1.0,
        }
    }
}
