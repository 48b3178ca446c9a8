//! Events raised inside `wry` callbacks, buffered for the event loop.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use wayfarer_common::TabId;
use wayfarer_tabs::ViewEvent;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Everything the webview callbacks can report.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Lifecycle event for the tab core.
    View(ViewEvent),
    /// A page asked for a permission and awaits an answer.
    Permission {
        tab: TabId,
        request_id: u64,
        kind: String,
        origin: String,
    },
    /// Raw IPC body from the chrome view.
    Chrome(String),
}

/// Thread-safe buffer shared by every webview callback.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<HostEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HostEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    pub fn push_view(&self, event: ViewEvent) {
        self.push(HostEvent::View(event));
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&self) -> Vec<HostEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }

    #[test]
    fn sink_drains_in_order() {
        let sink = EventSink::new();
        let tab = TabId::new();
        sink.push_view(ViewEvent::LoadStarted { tab });
        sink.push(HostEvent::Chrome("{}".into()));
        assert_eq!(sink.len(), 2);

        let events = sink.drain();
        assert_eq!(events[0], HostEvent::View(ViewEvent::LoadStarted { tab }));
        assert_eq!(events[1], HostEvent::Chrome("{}".into()));
        assert!(sink.is_empty());
    }

    #[test]
    fn clones_share_the_buffer() {
        let sink = EventSink::new();
        let other = sink.clone();
        other.push(HostEvent::Chrome("x".into()));
        assert_eq!(sink.drain().len(), 1);
    }
}
