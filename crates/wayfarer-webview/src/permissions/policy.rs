use tracing::{debug, warn};
use wayfarer_config::schema::PermissionsConfig;

use super::{permission_key, PermissionStore};

/// Answers permission requests from content pages.
///
/// Kinds in the auto-approve list are granted outright. Anything else is
/// looked up per origin; the first request from an origin records the
/// default decision so later requests are stable.
#[derive(Debug)]
pub struct PermissionPolicy {
    auto_approve: Vec<String>,
    default_allow: bool,
    store: PermissionStore,
}

impl PermissionPolicy {
    pub fn new(config: &PermissionsConfig, store: PermissionStore) -> Self {
        Self {
            auto_approve: config.auto_approve.clone(),
            default_allow: config.default_allow,
            store,
        }
    }

    pub fn decide(&mut self, origin: &str, kind: &str) -> bool {
        if self.auto_approve.iter().any(|k| k == kind) {
            debug!(origin, kind, "permission auto-approved");
            return true;
        }

        let key = permission_key(kind, origin);
        if let Some(allowed) = self.store.get(&key) {
            debug!(origin, kind, allowed, "permission from store");
            return allowed;
        }

        let allowed = self.default_allow;
        if let Err(e) = self.store.set(key, allowed) {
            warn!(origin, kind, error = %e, "failed to persist permission decision");
        }
        debug!(origin, kind, allowed, "permission recorded");
        allowed
    }

    pub fn store(&self) -> &PermissionStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(default_allow: bool) -> PermissionPolicy {
        let config = PermissionsConfig {
            default_allow,
            ..Default::default()
        };
        PermissionPolicy::new(&config, PermissionStore::in_memory())
    }

    #[test]
    fn auto_approved_kinds_skip_the_store() {
        let mut policy = policy(false);
        for kind in ["notifications", "fullscreen", "clipboard-read", "clipboard-write", "popup"] {
            assert!(policy.decide("https://a.com", kind), "{kind}");
        }
        assert!(policy.store().is_empty());
    }

    #[test]
    fn first_request_records_default() {
        let mut policy = policy(true);
        assert!(policy.decide("https://a.com", "geolocation"));
        assert_eq!(
            policy.store().get("permission.geolocation.https://a.com"),
            Some(true)
        );
    }

    #[test]
    fn stored_decision_wins_over_default() {
        let mut store = PermissionStore::in_memory();
        store.set("permission.camera.https://a.com", false).unwrap();
        let config = PermissionsConfig::default();
        let mut policy = PermissionPolicy::new(&config, store);

        assert!(!policy.decide("https://a.com", "camera"));
        assert!(policy.decide("https://b.com", "camera"));
    }

    #[test]
    fn deny_by_default_is_sticky() {
        let mut policy = policy(false);
        assert!(!policy.decide("https://a.com", "midi"));
        assert!(!policy.decide("https://a.com", "midi"));
        assert_eq!(policy.store().len(), 1);
    }

    #[test]
    fn decisions_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permissions.json");
        let config = PermissionsConfig {
            default_allow: false,
            ..Default::default()
        };

        let mut first = PermissionPolicy::new(&config, PermissionStore::open(&path));
        assert!(!first.decide("https://a.com", "camera"));

        let allow_config = PermissionsConfig::default();
        let mut second = PermissionPolicy::new(&allow_config, PermissionStore::open(&path));
        assert!(!second.decide("https://a.com", "camera"));
    }
}
