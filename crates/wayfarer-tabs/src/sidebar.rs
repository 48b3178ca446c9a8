//! Tab sidebar visibility and drag-resize state.

use wayfarer_config::schema::SidebarConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f64,
    start_width: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    visible: bool,
    width: u32,
    min_width: u32,
    max_width: u32,
    drag: Option<Drag>,
}

impl SidebarState {
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            visible: config.visible,
            width: config.width.max(config.min_width).min(config.max_width),
            min_width: config.min_width,
            max_width: config.max_width,
            drag: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Width the sidebar has when shown.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Horizontal space the sidebar takes right now (0 when hidden).
    pub fn effective_width(&self) -> u32 {
        if self.visible {
            self.width
        } else {
            0
        }
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Flip visibility and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.drag = None;
        tracing::debug!(visible = self.visible, "sidebar toggled");
        self.visible
    }

    /// Set the width. Widths outside `[min_width, max_width]` are ignored
    /// rather than clamped, so the edge stops where the pointer left range.
    pub fn resize_to(&mut self, width: u32) -> bool {
        if width < self.min_width || width > self.max_width {
            return false;
        }
        self.width = width;
        true
    }

    pub fn begin_drag(&mut self, x: f64) {
        if self.visible {
            self.drag = Some(Drag {
                start_x: x,
                start_width: self.width,
            });
        }
    }

    /// Pointer moved to `x` during a drag. Returns `true` if the width
    /// changed.
    pub fn drag_to(&mut self, x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let proposed = f64::from(drag.start_width) + (x - drag.start_x);
        if !proposed.is_finite() || proposed < 0.0 {
            return false;
        }
        let width = proposed.round() as u32;
        width != self.width && self.resize_to(width)
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(&SidebarConfig::default())
    }
}
