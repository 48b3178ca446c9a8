//! The [`Browser`] aggregate: one window's tabs, auth tracking, and chrome
//! state behind a single owner.

mod deferred;
mod dispatch;
mod events;


use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use wayfarer_common::{Event, EventBus, Rect, TabId};
use wayfarer_config::schema::WayfarerConfig;

use crate::auth::{AuthResolver, AuthTracker};
use crate::classify::InputClassifier;
use crate::registry::{Tab, TabRegistry};
use crate::scheduler::Scheduler;
use crate::sidebar::SidebarState;
use crate::view::ViewFactory;
use crate::zoom::ZoomPolicy;

pub struct Browser {
    registry: TabRegistry,
    classifier: InputClassifier,
    resolver: AuthResolver,
    tracker: AuthTracker,
    scheduler: Scheduler,
    sidebar: SidebarState,
    zoom: ZoomPolicy,
    settle_delay: Duration,
    events: EventBus,
}

impl Browser {
    /// Build a browser with one tab open at the configured home page.
    pub fn new(config: &WayfarerConfig, factory: Box<dyn ViewFactory>) -> Self {
        Self::with_start_url(config, factory, None)
    }

    /// Like [`new`](Self::new), but the first tab opens `start` (classified
    /// as address-bar input) when given.
    pub fn with_start_url(
        config: &WayfarerConfig,
        factory: Box<dyn ViewFactory>,
        start: Option<&str>,
    ) -> Self {
        let classifier = InputClassifier::new(&config.general.search_url);
        let home = config.general.home_url.clone();
        let start_url = start
            .map(|text| classifier.classify_input(text))
            .unwrap_or_else(|| home.clone());

        let zoom = ZoomPolicy::from_config(&config.zoom);

        Self {
            registry: TabRegistry::new(
                factory,
                &config.session.partition,
                home,
                zoom.reset(),
                &start_url,
            ),
            classifier,
            resolver: AuthResolver::with_login_path(&config.auth.login_path),
            tracker: AuthTracker::new(),
            scheduler: Scheduler::new(),
            sidebar: SidebarState::new(&config.sidebar),
            zoom,
            settle_delay: Duration::from_millis(config.auth.settle_delay_ms),
            events: EventBus::default(),
        }
    }

    // -- Accessors --

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.registry.tabs()
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.registry.active_id()
    }

    pub fn address_bar(&self) -> &str {
        self.registry.address_bar()
    }

    pub fn tracker(&self) -> &AuthTracker {
        &self.tracker
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn classifier(&self) -> &InputClassifier {
        &self.classifier
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// When the event loop must wake up next to run deferred work.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    // -- Host hooks --

    pub fn set_content_bounds(&mut self, bounds: Rect) {
        self.registry.set_all_bounds(bounds);
    }

    /// Retry view creation for tabs opened before the host was ready.
    pub fn attach_pending_views(&mut self) -> usize {
        let attached = self.registry.attach_pending_views();
        if attached > 0 {
            if let Some(active) = self.registry.active_id() {
                self.publish(Event::TabUpdated(active));
            }
        }
        attached
    }

    pub fn begin_sidebar_drag(&mut self, x: f64) {
        self.sidebar.begin_drag(x);
    }

    pub fn drag_sidebar(&mut self, x: f64) -> bool {
        if !self.sidebar.drag_to(x) {
            return false;
        }
        let width = self.sidebar.width();
        self.publish(Event::SidebarResized { width });
        true
    }

    pub fn end_sidebar_drag(&mut self) {
        self.sidebar.end_drag();
    }

    // -- Tab helpers shared by dispatch and view events --

    fn open_tab(&mut self, url: &str) -> TabId {
        self.open_tab_from(url, None)
    }

    fn open_tab_from(&mut self, url: &str, opener: Option<TabId>) -> TabId {
        let id = self.registry.create_tab_from(url, opener);
        self.publish(Event::TabOpened(id));
        self.publish(Event::TabActivated(id));
        self.publish_address_bar();
        id
    }

    /// Open `url` in a new tab tracked as signing in on behalf of `origin`.
    fn open_auth_tab(&mut self, url: &str, origin: TabId) -> TabId {
        let auth = self.open_tab_from(url, Some(origin));
        if self.tracker.begin(auth, origin) {
            self.publish(Event::AuthStarted { auth, origin });
        }
        auth
    }

    fn activate(&mut self, id: TabId) -> bool {
        if !self.registry.activate_tab(id) {
            return false;
        }
        self.publish(Event::TabActivated(id));
        self.publish_address_bar();
        true
    }

    /// Close `id`, dropping any auth mapping and pending return involving it.
    fn close(&mut self, id: TabId) -> bool {
        if !self.registry.contains(id) {
            return false;
        }
        self.tracker.forget_tab(id);
        self.scheduler.cancel_involving(id);

        let was_active = self.registry.active_id() == Some(id);
        let before = self.registry.len();
        self.registry.close_tab(id);
        self.publish(Event::TabClosed(id));

        if let Some(active) = self.registry.active_id() {
            if before == 1 {
                self.publish(Event::TabOpened(active));
            }
            if was_active {
                self.publish(Event::TabActivated(active));
                self.publish_address_bar();
            }
        }
        true
    }

    fn publish(&self, event: Event) {
        self.events.publish(event);
    }

    fn publish_address_bar(&self) {
        self.publish(Event::AddressBarChanged(
            self.registry.address_bar().to_string(),
        ));
    }
}
