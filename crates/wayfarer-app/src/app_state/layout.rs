//! Window geometry for the chrome and content views.

use wayfarer_common::Rect;

/// The chrome view covers the whole window; content views sit on top of it.
pub fn chrome_rect(width: f64, height: f64) -> Rect {
    Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0))
}

/// Area right of the sidebar and below the navigation bar.
pub fn content_rect(width: f64, height: f64, sidebar_width: u32, nav_bar_height: u32) -> Rect {
    let x = f64::from(sidebar_width).min(width.max(0.0));
    let y = f64::from(nav_bar_height).min(height.max(0.0));
    Rect::new(x, y, (width - x).max(0.0), (height - y).max(0.0))
}
