use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::TabId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    TabOpened(TabId),
    TabClosed(TabId),
    TabActivated(TabId),
    TabUpdated(TabId),
    AddressBarChanged(String),
    FocusAddressBar,
    SidebarToggled { visible: bool },
    SidebarResized { width: u32 },
    AuthStarted { auth: TabId, origin: TabId },
    AuthResolved { auth: TabId, origin: TabId },
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish to all current subscribers. Returns how many received it;
    /// zero subscribers is not an error.
    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "event published");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
