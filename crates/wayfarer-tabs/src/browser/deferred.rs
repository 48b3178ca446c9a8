use std::time::Instant;

use wayfarer_common::TabId;

use super::Browser;
use crate::scheduler::DeferredTask;

impl Browser {
    /// Run every deferred task due at `now`. Returns how many ran.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        let ran = due.len();
        for task in due {
            match task {
                DeferredTask::ReturnToOrigin { auth, origin } => {
                    self.return_to_origin(auth, origin)
                }
            }
        }
        ran
    }

    /// Bring the origin tab forward and reload it so it picks up the new
    /// session cookies.
    fn return_to_origin(&mut self, auth: TabId, origin: TabId) {
        if !self.activate(origin) {
            tracing::debug!(auth = %auth, origin = %origin, "origin tab gone; not returning");
            return;
        }
        match self.registry.view_mut(origin) {
            Some(view) => {
                if let Err(e) = view.reload() {
                    tracing::warn!(tab = %origin, error = %e, "reload after sign-in failed");
                }
            }
            None => tracing::debug!(tab = %origin, "origin has no view to reload"),
        }
        tracing::info!(auth = %auth, origin = %origin, "returned to origin after sign-in");
    }
}
