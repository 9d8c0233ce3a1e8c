use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::debug;

use super::carousel::{Carousel, CarouselSettings};
use super::items::{ItemList, ListIdentity};
use super::timer::{current_runtime, ScheduledTask, TickControl, TimerError};

/// Published after every change so hosts can re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSnapshot {
    pub list: ListIdentity,
    pub current_index: usize,
    pub visible_count: usize,
    pub is_cycling: bool,
    pub advances: u64,
}

impl RotationSnapshot {
    fn of(carousel: &Carousel) -> Self {
        let state = carousel.state();
        Self {
            list: carousel.list_identity(),
            current_index: state.current_index,
            visible_count: state.visible_count,
            is_cycling: state.is_cycling,
            advances: carousel.advances(),
        }
    }
}

fn lock(carousel: &Mutex<Carousel>) -> std::sync::MutexGuard<'_, Carousel> {
    carousel.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mounted carousel plus the timer that advances it.
///
/// The timer exists only while the carousel is cycling. Dropping the driver
/// (unmount) aborts it, and the tick closure holds only a weak reference.
#[derive(Debug)]
pub struct RotationDriver {
    carousel: Arc<Mutex<Carousel>>,
    interval: Duration,
    runtime: Handle,
    timer: Option<ScheduledTask>,
    updates: Arc<watch::Sender<RotationSnapshot>>,
}

impl RotationDriver {
    /// Mounts an empty carousel. Must run inside a Tokio runtime.
    pub fn mount(
        settings: CarouselSettings,
        interval: Duration,
        viewport_width: u32,
    ) -> Result<Self, TimerError> {
        let runtime = current_runtime()?;
        let carousel = Carousel::new(settings, viewport_width);
        let (updates, _) = watch::channel(RotationSnapshot::of(&carousel));
        Ok(Self {
            carousel: Arc::new(Mutex::new(carousel)),
            interval,
            runtime,
            timer: None,
            updates: Arc::new(updates),
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<RotationSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> RotationSnapshot {
        RotationSnapshot::of(&lock(&self.carousel))
    }

    pub fn has_active_timer(&self) -> bool {
        self.timer
            .as_ref()
            .map(|timer| !timer.is_finished())
            .unwrap_or(false)
    }

    /// Read access for rendering a frame.
    pub fn with_carousel<R>(&self, f: impl FnOnce(&Carousel) -> R) -> R {
        f(&lock(&self.carousel))
    }

    /// Handles a "list identity changed" event: stop the old timer, rewind, restart if needed.
    pub fn replace_items(&mut self, list: ItemList) {
        if list.identity() == lock(&self.carousel).list_identity() {
            return;
        }
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        lock(&self.carousel).replace_items(list);
        self.publish();
        self.reconcile();
    }

    pub fn resize(&mut self, viewport_width: u32) {
        lock(&self.carousel).resize(viewport_width);
        self.publish();
        self.reconcile();
    }

    pub fn set_visible(&mut self, visible: bool) {
        lock(&self.carousel).set_visible(visible);
        self.publish();
        self.reconcile();
    }

    pub fn unmount(self) {
        drop(self);
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }

    fn reconcile(&mut self) {
        let cycling = lock(&self.carousel).state().is_cycling;
        match (cycling, self.timer.is_some()) {
            (true, false) => {
                debug!(interval_ms = self.interval.as_millis() as u64, "rotation timer started");
                self.timer = Some(self.start_timer());
            }
            (false, true) => {
                debug!("rotation timer stopped");
                self.timer = None;
            }
            _ => {}
        }
    }

    fn start_timer(&self) -> ScheduledTask {
        let carousel: Weak<Mutex<Carousel>> = Arc::downgrade(&self.carousel);
        let updates = Arc::clone(&self.updates);
        ScheduledTask::every(&self.runtime, self.interval, move || {
            let Some(carousel) = carousel.upgrade() else {
                return TickControl::Stop;
            };
            let mut guard = lock(&carousel);
            if guard.advance().is_none() {
                return TickControl::Stop;
            }
            updates.send_replace(RotationSnapshot::of(&guard));
            TickControl::Continue
        })
    }
}
