//! Owned handle for the scheduled tick callback.
//!
//! At most one tick callback may be outstanding at a time. Every state
//! change that affects the countdown must cancel the pending callback
//! before scheduling a new one -- `schedule` does the cancel itself, and
//! `cancel` is idempotent (cancelling an already-fired or already-
//! cancelled callback is a no-op). The handle lives inside the session
//! coordinator; there is no ambient/global timer.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns the single scheduled tick task, if any.
#[derive(Debug, Default)]
pub struct TickHandle {
    task: Option<JoinHandle<()>>,
}

impl TickHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a callback is scheduled and has not yet fired.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel the pending callback. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Arm a one-second callback, cancelling any pending one first, so
    /// duplicate or overlapping decrements are impossible.
    pub fn schedule(&mut self, notify: UnboundedSender<()>) {
        self.cancel();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(TICK_PERIOD).await;
            let _ = notify.send(());
        }));
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
