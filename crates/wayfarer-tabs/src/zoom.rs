//! Zoom factor stepping.

use wayfarer_config::schema::ZoomConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPolicy {
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ZoomPolicy {
    pub fn from_config(config: &ZoomConfig) -> Self {
        Self {
            step: config.step,
            min: config.min,
            max: config.max,
            default: config.default,
        }
    }

    pub fn zoom_in(&self, factor: f64) -> f64 {
        self.clamp(factor + self.step)
    }

    pub fn zoom_out(&self, factor: f64) -> f64 {
        self.clamp(factor - self.step)
    }

    pub fn reset(&self) -> f64 {
        self.clamp(self.default)
    }

    /// Clamp into `[min, max]`, rounded to two decimals so repeated steps
    /// do not accumulate float error.
    pub fn clamp(&self, factor: f64) -> f64 {
        let factor = if factor.is_finite() { factor } else { self.default };
        let rounded = (factor * 100.0).round() / 100.0;
        rounded.max(self.min).min(self.max)
    }
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self::from_config(&ZoomConfig::default())
    }
}
