//! Recording content-view double for core tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wayfarer_common::{Rect, TabId};

use crate::view::{ContentView, ViewError, ViewFactory, ViewSpec};

/// Observable state of one mock view.
#[derive(Debug, Clone, Default)]
pub struct MockState {
    pub spec: Option<ViewSpec>,
    pub url: String,
    pub title: String,
    pub ready: bool,
    pub visible: bool,
    pub bounds: Option<Rect>,
    pub zoom: f64,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub backs: usize,
    pub forwards: usize,
    pub reloads: usize,
    pub hard_reloads: usize,
    pub loads: Vec<String>,
    pub dropped: bool,
}

/// Shared handle to every view a [`MockFactory`] has created.
#[derive(Clone, Default)]
pub struct MockHost {
    views: Rc<RefCell<HashMap<TabId, MockState>>>,
    fail_create: Rc<RefCell<bool>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factory(&self) -> Box<dyn ViewFactory> {
        Box::new(MockFactory { host: self.clone() })
    }

    /// Make subsequent `create` calls fail with `NotReady`.
    pub fn set_failing(&self, failing: bool) {
        *self.fail_create.borrow_mut() = failing;
    }

    pub fn state(&self, tab: TabId) -> MockState {
        self.views
            .borrow()
            .get(&tab)
            .cloned()
            .unwrap_or_else(|| panic!("no view for {tab}"))
    }

    pub fn has_view(&self, tab: TabId) -> bool {
        self.views.borrow().contains_key(&tab)
    }

    pub fn with<R>(&self, tab: TabId, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut views = self.views.borrow_mut();
        let state = views
            .get_mut(&tab)
            .unwrap_or_else(|| panic!("no view for {tab}"));
        f(state)
    }
}

struct MockFactory {
    host: MockHost,
}

impl ViewFactory for MockFactory {
    fn create(&mut self, tab: TabId, spec: &ViewSpec) -> Result<Box<dyn ContentView>, ViewError> {
        if *self.host.fail_create.borrow() {
            return Err(ViewError::NotReady);
        }
        self.host.views.borrow_mut().insert(
            tab,
            MockState {
                spec: Some(spec.clone()),
                url: spec.url.clone(),
                zoom: 1.0,
                ..Default::default()
            },
        );
        Ok(Box::new(MockView {
            tab,
            host: self.host.clone(),
        }))
    }
}

struct MockView {
    tab: TabId,
    host: MockHost,
}

impl MockView {
    fn with<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        self.host.with(self.tab, f)
    }
}

impl Drop for MockView {
    fn drop(&mut self) {
        if let Some(state) = self.host.views.borrow_mut().get_mut(&self.tab) {
            state.dropped = true;
        }
    }
}

impl ContentView for MockView {
    fn back(&mut self) -> Result<(), ViewError> {
        self.with(|s| s.backs += 1);
        Ok(())
    }

    fn forward(&mut self) -> Result<(), ViewError> {
        self.with(|s| s.forwards += 1);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.with(|s| s.can_go_back)
    }

    fn can_go_forward(&self) -> bool {
        self.with(|s| s.can_go_forward)
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.with(|s| s.reloads += 1);
        Ok(())
    }

    fn reload_ignoring_cache(&mut self) -> Result<(), ViewError> {
        self.with(|s| s.hard_reloads += 1);
        Ok(())
    }

    fn zoom_factor(&self) -> f64 {
        self.with(|s| s.zoom)
    }

    fn set_zoom_factor(&mut self, factor: f64) -> Result<(), ViewError> {
        self.with(|s| s.zoom = factor);
        Ok(())
    }

    fn url(&self) -> Result<String, ViewError> {
        self.with(|s| if s.ready { Ok(s.url.clone()) } else { Err(ViewError::NotReady) })
    }

    fn title(&self) -> Result<String, ViewError> {
        self.with(|s| if s.ready { Ok(s.title.clone()) } else { Err(ViewError::NotReady) })
    }

    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        self.with(|s| {
            s.loads.push(url.to_string());
            s.url = url.to_string();
        });
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        self.with(|s| s.visible = visible);
        Ok(())
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), ViewError> {
        self.with(|s| s.bounds = Some(bounds));
        Ok(())
    }
}
