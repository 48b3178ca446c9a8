//! One-shot deferred tasks, polled by the event loop.

use std::time::Instant;

use wayfarer_common::TabId;

/// Handle returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Work that runs after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Switch back to `origin` and reload it once sign-in in `auth` settles.
    ReturnToOrigin { auth: TabId, origin: TabId },
}

impl DeferredTask {
    /// Whether the task refers to `tab` in any role.
    pub fn involves(&self, tab: TabId) -> bool {
        match self {
            Self::ReturnToOrigin { auth, origin } => *auth == tab || *origin == tab,
        }
    }
}

#[derive(Debug)]
struct Scheduled {
    id: TaskId,
    due: Instant,
    task: DeferredTask,
}

/// Cancellable timer queue. Time is passed in by the caller so the queue is
/// deterministic under test.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: DeferredTask, due: Instant) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?id, ?task, "task scheduled");
        self.pending.push(Scheduled { id, due, task });
        id
    }

    /// Returns `false` if the task already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        before != self.pending.len()
    }

    /// Cancel every task that involves `tab`. Returns how many were dropped.
    pub fn cancel_involving(&mut self, tab: TabId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|s| !s.task.involves(tab));
        let cancelled = before - self.pending.len();
        if cancelled > 0 {
            tracing::debug!(%tab, cancelled, "deferred tasks cancelled");
        }
        cancelled
    }

    /// Remove and return every task due at or before `now`, earliest first.
    /// Tasks with the same deadline come out in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.id));
        due.into_iter().map(|s| s.task).collect()
    }

    /// Earliest pending deadline, for `ControlFlow::WaitUntil`.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
