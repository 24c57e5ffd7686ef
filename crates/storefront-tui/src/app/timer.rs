//! Cancellable one-shot timers
//!
//! A [`ScheduledTransition`] owns the task that will fire it. Dropping the
//! handle aborts the task, so a page that leaves the router can never fire a
//! late transition.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::events::{Event, EventSender};

static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    fn next() -> Self {
        Self(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a pending splash transition
#[derive(Debug)]
pub struct ScheduledTransition {
    id: TimerId,
    deadline: Instant,
    handle: JoinHandle<()>,
}

impl ScheduledTransition {
    /// Fire [`Event::SplashElapsed`] after `delay`
    ///
    /// The deadline is fixed now, not when the task first runs.
    pub fn schedule(delay: Duration, tx: EventSender) -> Self {
        let id = TimerId::next();
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tracing::debug!(timer = ?id, "splash timer elapsed");
            let _ = tx.send(Event::SplashElapsed(id));
        });
        Self {
            id,
            deadline,
            handle,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Time left before the transition fires
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTransition {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!(timer = ?self.id, "cancelling splash timer");
        }
        self.handle.abort();
    }
}
