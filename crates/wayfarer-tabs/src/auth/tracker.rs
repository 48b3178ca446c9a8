use std::collections::HashMap;

use wayfarer_common::TabId;

use crate::classify::looks_like_auth_url;

/// An auth tab that has left sign-in territory, paired with the tab that
/// opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthResolution {
    pub auth: TabId,
    pub origin: TabId,
}

/// Tracks which tabs are pending sign-ins and for whom.
///
/// A tab with no entry is idle. `begin` moves it to pending; the first
/// navigation to a non-auth page resolves it and removes the entry, so each
/// `begin` produces at most one resolution.
#[derive(Debug, Default)]
pub struct AuthTracker {
    /// auth tab -> origin tab
    pending: HashMap<TabId, TabId>,
}

impl AuthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `auth` on behalf of `origin`. A tab cannot be its own
    /// origin; such calls are ignored and return `false`.
    pub fn begin(&mut self, auth: TabId, origin: TabId) -> bool {
        if auth == origin {
            tracing::warn!(tab = %auth, "auth tab cannot be its own origin");
            return false;
        }
        if let Some(previous) = self.pending.insert(auth, origin) {
            tracing::debug!(auth = %auth, %previous, "replacing pending auth origin");
        }
        tracing::info!(auth = %auth, origin = %origin, "auth pending");
        true
    }

    /// Feed a navigation observed in `tab`.
    pub fn on_navigation(&mut self, tab: TabId, url: &str) -> Option<AuthResolution> {
        if !self.pending.contains_key(&tab) || looks_like_auth_url(url) {
            return None;
        }
        let origin = self.pending.remove(&tab)?;
        tracing::info!(auth = %tab, origin = %origin, url, "auth resolved");
        Some(AuthResolution { auth: tab, origin })
    }

    /// Drop every entry in which `tab` is the auth or the origin tab.
    /// Returns the number of entries removed.
    pub fn forget_tab(&mut self, tab: TabId) -> usize {
        let before = self.pending.len();
        self.pending
            .retain(|auth, origin| *auth != tab && *origin != tab);
        let removed = before - self.pending.len();
        if removed > 0 {
            tracing::debug!(%tab, removed, "dropped auth mappings");
        }
        removed
    }

    pub fn origin_of(&self, auth: TabId) -> Option<TabId> {
        self.pending.get(&auth).copied()
    }

    pub fn is_pending(&self, auth: TabId) -> bool {
        self.pending.contains_key(&auth)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGN_IN: &str = "https://accounts.google.com/signin/v2/identifier";
    const INBOX: &str = "https://mail.google.com/mail/u/0";

    #[test]
    fn new_tracker_is_idle() {
        let tracker = AuthTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.origin_of(TabId::new()), None);
    }

    #[test]
    fn auth_navigation_keeps_pending() {
        let (auth, origin) = (TabId::new(), TabId::new());
        let mut tracker = AuthTracker::new();
        tracker.begin(auth, origin);

        assert_eq!(tracker.on_navigation(auth, SIGN_IN), None);
        assert!(tracker.is_pending(auth));
    }

    #[test]
    fn leaving_auth_resolves_once() {
        let (auth, origin) = (TabId::new(), TabId::new());
        let mut tracker = AuthTracker::new();
        tracker.begin(auth, origin);

        assert_eq!(
            tracker.on_navigation(auth, INBOX),
            Some(AuthResolution { auth, origin })
        );
        assert!(!tracker.is_pending(auth));
        assert_eq!(tracker.on_navigation(auth, INBOX), None);
        assert_eq!(tracker.on_navigation(auth, "https://example.com/"), None);
    }

    #[test]
    fn untracked_tab_never_resolves() {
        let mut tracker = AuthTracker::new();
        assert_eq!(tracker.on_navigation(TabId::new(), INBOX), None);
    }

    #[test]
    fn navigation_in_origin_does_not_resolve() {
        let (auth, origin) = (TabId::new(), TabId::new());
        let mut tracker = AuthTracker::new();
        tracker.begin(auth, origin);
        assert_eq!(tracker.on_navigation(origin, INBOX), None);
        assert!(tracker.is_pending(auth));
    }

    #[test]
    fn self_origin_is_rejected() {
        let tab = TabId::new();
        let mut tracker = AuthTracker::new();
        assert!(!tracker.begin(tab, tab));
        assert!(tracker.is_empty());
    }

    #[test]
    fn begin_again_restarts_tracking() {
        let (auth, o1, o2) = (TabId::new(), TabId::new(), TabId::new());
        let mut tracker = AuthTracker::new();
        tracker.begin(auth, o1);
        tracker.on_navigation(auth, INBOX);
        tracker.begin(auth, o2);
        assert_eq!(tracker.origin_of(auth), Some(o2));
    }

    #[test]
    fn forget_auth_tab() {
        let (auth, origin) = (TabId::new(), TabId::new());
        let mut tracker = AuthTracker::new();
        tracker.begin(auth, origin);
        assert_eq!(tracker.forget_tab(auth), 1);
        assert!(tracker.is_empty());
    }

    #[test]
    fn forget_origin_drops_every_dependent_auth_tab() {
        let (a1, a2, origin, other) = (TabId::new(), TabId::new(), TabId::new(), TabId::new());
        let mut tracker = AuthTracker::new();
        tracker.begin(a1, origin);
        tracker.begin(a2, origin);
        tracker.begin(other, a1);

        assert_eq!(tracker.forget_tab(origin), 2);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.on_navigation(a1, INBOX), None);
    }

    #[test]
    fn forget_unknown_is_noop() {
        let mut tracker = AuthTracker::new();
        tracker.begin(TabId::new(), TabId::new());
        assert_eq!(tracker.forget_tab(TabId::new()), 0);
        assert_eq!(tracker.len(), 1);
    }
}
