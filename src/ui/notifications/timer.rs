// SPDX-License-Identifier: MPL-2.0
//! Dismiss timer facilities.
//!
//! The lifecycle controller never sleeps or spawns anything itself. It asks a
//! [`TimerFacility`] for a timer and keeps the returned [`TimerId`] next to its
//! state; the facility later reports the fire back through the host's update
//! loop. Two facilities are provided:
//!
//! - [`TaskTimers`] schedules abortable Iced tasks backed by `tokio::time`.
//! - [`ManualTimers`] keeps timers on a virtual clock that the caller advances,
//!   for headless hosts and tests.

use iced::task::{self, Task};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::{Duration, Instant};

/// Handle to one scheduled dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Host timer facility used by the lifecycle controller.
pub trait TimerFacility {
    /// Schedules a timer that fires `delay` after `now`.
    fn schedule(&mut self, now: Instant, delay: Duration) -> TimerId;

    /// Cancels a pending timer.
    ///
    /// Cancelling an id that already fired or was already cancelled is a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// Timers backed by abortable Iced tasks.
///
/// Each scheduled timer becomes a `Task` that sleeps and then produces the
/// message built by `on_fire`. The tasks are collected until the host drains
/// them with [`TaskTimers::take_tasks`] and returns them from `update`.
/// Dropping the facility aborts every task still pending.
pub struct TaskTimers<Message> {
    next: u64,
    handles: HashMap<TimerId, task::Handle>,
    queued: Vec<Task<Message>>,
    on_fire: fn(TimerId) -> Message,
}

impl<Message> TaskTimers<Message> {
    /// Creates a facility that reports fires with `on_fire`.
    #[must_use]
    pub fn new(on_fire: fn(TimerId) -> Message) -> Self {
        Self {
            next: 0,
            handles: HashMap::new(),
            queued: Vec::new(),
            on_fire,
        }
    }

    /// Drains the tasks scheduled since the last call.
    pub fn take_tasks(&mut self) -> Task<Message>
    where
        Message: Send + 'static,
    {
        Task::batch(std::mem::take(&mut self.queued))
    }

    /// Returns the number of timers that have not fired or been cancelled.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}

impl<Message> fmt::Debug for TaskTimers<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskTimers")
            .field("next", &self.next)
            .field("live", &self.handles.len())
            .field("queued", &self.queued.len())
            .finish()
    }
}

impl<Message: Send + 'static> TimerFacility for TaskTimers<Message> {
    fn schedule(&mut self, _now: Instant, delay: Duration) -> TimerId {
        let id = TimerId(self.next);
        self.next += 1;

        let on_fire = self.on_fire;
        // The sleep is created lazily so scheduling works outside the runtime.
        let sleep = async move { tokio::time::sleep(delay).await };
        let (task, handle) = Task::perform(sleep, move |()| on_fire(id)).abortable();
        self.handles.insert(id, handle.abort_on_drop());
        self.queued.push(task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.handles.remove(&id) {
            handle.abort();
        }
    }
}

/// Timers on a virtual clock.
///
/// Nothing fires on its own: the owner calls [`ManualTimers::due`] with the
/// current instant and forwards the returned ids. Every schedule and effective
/// cancel is counted so callers can assert on timer hygiene.
#[derive(Debug, Default)]
pub struct ManualTimers {
    next: u64,
    pending: BTreeMap<TimerId, Instant>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every pending timer whose deadline is at or before
    /// `now`, in scheduling order.
    pub fn due(&mut self, now: Instant) -> Vec<TimerId> {
        let due: Vec<TimerId> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &due {
            self.pending.remove(id);
        }
        due
    }

    /// Returns the deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.pending.get(&id).copied()
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl TimerFacility for ManualTimers {
    fn schedule(&mut self, now: Instant, delay: Duration) -> TimerId {
        let id = TimerId(self.next);
        self.next += 1;
        self.scheduled += 1;
        self.pending.insert(id, now + delay);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.pending.remove(&id).is_some() {
            self.cancelled += 1;
        }
    }
}
