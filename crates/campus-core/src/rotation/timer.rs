use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Returned by a tick callback to keep or end the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("rotation timers need a running Tokio runtime")]
    NoRuntime,
}

/// Fixed-rate repeating task that is aborted when the handle is dropped.
///
/// Ticks land on `start + n * period`; a late tick is skipped rather than
/// bunched up, so the schedule does not drift.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn every<F>(runtime: &Handle, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        // tokio rejects a zero period.
        let period = period.max(Duration::from_millis(1));
        let handle = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if on_tick() == TickControl::Stop {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub(crate) fn current_runtime() -> Result<Handle, TimerError> {
    Handle::try_current().map_err(|_| TimerError::NoRuntime)
}
