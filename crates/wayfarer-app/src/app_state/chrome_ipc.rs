//! Messages from the chrome view, validated and turned into commands.

use wayfarer_common::{Action, TabId};
use wayfarer_webview::{IpcMessage, PageMessage, ShortcutPress};

use super::core::WayfarerApp;
use super::shortcuts::resolve_press;

/// Allowed IPC message kinds from the chrome.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_CHROME_KINDS: &[&str] = &[
    "ready",
    "new_tab",
    "close_tab",
    "activate_tab",
    "navigate",
    "back",
    "forward",
    "reload",
    "toggle_sidebar",
    "switch_account",
    "sidebar_drag_start",
    "sidebar_drag",
    "sidebar_drag_end",
    "shortcut",
];

pub fn is_chrome_kind_allowed(kind: &str) -> bool {
    ALLOWED_CHROME_KINDS.contains(&kind)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChromeCommand {
    /// The chrome script loaded and wants a state snapshot.
    Ready,
    Action(Action),
    DragStart(f64),
    Drag(f64),
    DragEnd,
    Shortcut(ShortcutPress),
}

fn tab_id(msg: &IpcMessage) -> Option<TabId> {
    let value = msg.payload.field("id")?.clone();
    serde_json::from_value(value).ok()
}

/// Interpret a chrome message. `None` for unknown kinds or malformed
/// payloads.
pub fn parse_chrome_message(msg: &IpcMessage) -> Option<ChromeCommand> {
    if !is_chrome_kind_allowed(&msg.kind) {
        return None;
    }
    let command = match msg.kind.as_str() {
        "ready" => ChromeCommand::Ready,
        "new_tab" => ChromeCommand::Action(Action::NewTab),
        "close_tab" => ChromeCommand::Action(Action::CloseTab(tab_id(msg)?)),
        "activate_tab" => ChromeCommand::Action(Action::ActivateTab(tab_id(msg)?)),
        "navigate" => {
            let text = msg.payload.str_field("text")?.trim();
            if text.is_empty() {
                return None;
            }
            ChromeCommand::Action(Action::Navigate(text.to_string()))
        }
        "back" => ChromeCommand::Action(Action::GoBack),
        "forward" => ChromeCommand::Action(Action::GoForward),
        "reload" => ChromeCommand::Action(Action::Reload),
        "toggle_sidebar" => ChromeCommand::Action(Action::ToggleSidebar),
        "switch_account" => ChromeCommand::Action(Action::SwitchAccount),
        "sidebar_drag_start" => ChromeCommand::DragStart(msg.payload.f64_field("x")?),
        "sidebar_drag" => ChromeCommand::Drag(msg.payload.f64_field("x")?),
        "sidebar_drag_end" => ChromeCommand::DragEnd,
        "shortcut" => match PageMessage::parse(msg)? {
            PageMessage::Shortcut(press) => ChromeCommand::Shortcut(press),
            _ => return None,
        },
        _ => return None,
    };
    Some(command)
}

impl WayfarerApp {
    /// Handle a single message from the chrome view.
    pub(super) fn handle_chrome_message(&mut self, msg: IpcMessage) {
        let Some(command) = parse_chrome_message(&msg) else {
            tracing::warn!(kind = %msg.kind, "chrome IPC rejected");
            return;
        };
        tracing::debug!(kind = %msg.kind, "chrome IPC dispatched");

        match command {
            ChromeCommand::Ready => {
                self.chrome_ready = true;
                self.chrome_dirty = true;
                self.send_tooltips();
            }
            ChromeCommand::Action(action) => self.dispatch(action),
            ChromeCommand::DragStart(x) => self.browser.begin_sidebar_drag(x),
            ChromeCommand::Drag(x) => {
                self.browser.drag_sidebar(x);
            }
            ChromeCommand::DragEnd => self.browser.end_sidebar_drag(),
            ChromeCommand::Shortcut(press) => {
                if let Some(action) = resolve_press(&self.keybinds, &press) {
                    self.dispatch(action);
                }
            }
        }
    }
}
