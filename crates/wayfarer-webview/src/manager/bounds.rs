use wayfarer_common::Rect;
use wry::dpi::{LogicalPosition, LogicalSize};

/// Convert a logical-pixel [`Rect`] to `wry::Rect`.
pub fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(LogicalSize::new(
            rect.width.max(0.0),
            rect.height.max(0.0),
        )),
    }
}
