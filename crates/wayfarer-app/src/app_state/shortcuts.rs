//! Shortcut resolution for key presses seen by the window or reported by
//! a focused webview.

use wayfarer_common::Action;
use wayfarer_platform::{normalize_winit_key, KeyCombo, KeybindRegistry};
use wayfarer_webview::ShortcutPress;

/// Key names as produced by the DOM and by winit's `NamedKey` debug form
/// share the same spelling for everything bound by default.
pub fn combo_from_press(press: &ShortcutPress) -> KeyCombo {
    KeyCombo::from_winit(
        press.ctrl,
        press.alt,
        press.shift,
        press.meta,
        normalize_winit_key(&press.key),
    )
}

pub fn resolve_press(registry: &KeybindRegistry, press: &ShortcutPress) -> Option<Action> {
    registry.lookup(&combo_from_press(press)).cloned()
}
