// SPDX-License-Identifier: MPL-2.0
//! Toast display lifecycle.
//!
//! A [`Lifecycle`] owns everything a single toast needs between "show" and
//! "closed": the phase, the two animated values (vertical offset, opacity) and
//! the one dismiss timer. Transitions are plain methods taking the current
//! instant, so the whole machine runs without a renderer.
//!
//! ```text
//! Hidden ──show──▶ Entering ──enter done──▶ Resting
//!                     │                        │
//!                     └──dismiss / timer───────┴──▶ Exiting ──offset done──▶ Hidden (+ Closed)
//! ```
//!
//! Invariants:
//! - at most one dismiss timer is live; it is cancelled on every path that
//!   leaves a cycle, including drop
//! - a timer fire is only honored when its id is the live timer
//! - each cycle yields exactly one [`Closed`], after the offset reached the
//!   hidden position

use super::animation::{Easing, Sequence, Tween};
use super::notification::{CycleId, NotificationRequest};
use super::timer::{TimerFacility, TimerId};
use std::time::{Duration, Instant};

/// Vertical offset of a fully hidden toast (above the viewport).
pub const HIDDEN_OFFSET: f32 = -100.0;

/// Vertical offset of a toast at rest.
pub const RESTING_OFFSET: f32 = 0.0;

/// Default duration of the enter and exit animations.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(300);

/// Messages emitted by the toast view and the timer facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user pressed the close control.
    Dismiss,
    /// A dismiss timer fired.
    TimerFired(TimerId),
}

/// Observable phase of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entering,
    Resting,
    Exiting,
}

/// Sampled animation values, read by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Logical pixels; [`HIDDEN_OFFSET`] is above the viewport, [`RESTING_OFFSET`] at rest.
    pub vertical_offset: f32,
    /// In `[0, 1]`.
    pub opacity: f32,
}

impl AnimationState {
    pub const HIDDEN: Self = Self {
        vertical_offset: HIDDEN_OFFSET,
        opacity: 0.0,
    };

    pub const RESTING: Self = Self {
        vertical_offset: RESTING_OFFSET,
        opacity: 1.0,
    };
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Animation timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub enter: Duration,
    pub exit: Duration,
    pub easing: Easing,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            enter: DEFAULT_ANIMATION,
            exit: DEFAULT_ANIMATION,
            easing: Easing::default(),
        }
    }
}

/// Emitted once per display cycle when the exit transition has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed {
    pub cycle: CycleId,
}

#[derive(Debug)]
enum State {
    Hidden,
    Entering {
        cycle: CycleId,
        offset: Tween,
        opacity: Tween,
    },
    Resting {
        cycle: CycleId,
    },
    Exiting {
        cycle: CycleId,
        offset: Sequence<Closed>,
        opacity: Tween,
    },
}

/// State machine driving one toast.
#[derive(Debug)]
pub struct Lifecycle<T: TimerFacility> {
    state: State,
    animation: AnimationState,
    request: Option<NotificationRequest>,
    /// Host-facing visibility input, edge-detected by [`Lifecycle::set_visible`].
    visible: bool,
    next_cycle: CycleId,
    timer: Option<TimerId>,
    timers: T,
    motion: Motion,
}

impl<T: TimerFacility> Lifecycle<T> {
    /// Creates a hidden lifecycle with default timings.
    pub fn new(timers: T) -> Self {
        Self::with_motion(timers, Motion::default())
    }

    /// Creates a hidden lifecycle with custom timings.
    pub fn with_motion(timers: T, motion: Motion) -> Self {
        Self {
            state: State::Hidden,
            animation: AnimationState::HIDDEN,
            request: None,
            visible: false,
            next_cycle: CycleId::first(),
            timer: None,
            timers,
            motion,
        }
    }

    /// Shows `request`.
    ///
    /// - Hidden: starts a new cycle.
    /// - Exiting: the running exit is resolved (its [`Closed`] is returned) and
    ///   a new cycle starts.
    /// - Entering/Resting with identical content: nothing happens.
    /// - Entering/Resting with new content: the content is replaced and the
    ///   dismiss timer restarts with the new duration; the animation is not
    ///   replayed.
    pub fn show(&mut self, request: NotificationRequest, now: Instant) -> Option<Closed> {
        match self.state {
            State::Hidden | State::Exiting { .. } => {
                self.request = Some(request);
                self.begin_cycle(now)
            }
            State::Entering { .. } | State::Resting { .. } => {
                if self.request.as_ref() != Some(&request) {
                    tracing::debug!(kind = ?request.kind(), "toast content replaced");
                    let duration = request.duration();
                    self.request = Some(request);
                    self.schedule_dismiss(now, duration);
                }
                None
            }
        }
    }

    /// Replaces the content without touching the lifecycle.
    pub fn set_request(&mut self, request: NotificationRequest) {
        self.request = Some(request);
    }

    /// Host visibility input.
    ///
    /// A false → true edge starts a new cycle when content is present.
    /// A true → false edge while Entering or Resting runs the normal exit
    /// transition, so [`Closed`] still fires once. Repeated values are ignored.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> Option<Closed> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;

        if visible {
            if self.request.is_none() {
                tracing::warn!("toast made visible without content; ignoring");
                self.visible = false;
                return None;
            }
            self.begin_cycle(now)
        } else {
            self.begin_exit(now);
            None
        }
    }

    /// User pressed the close control. No-op unless Entering or Resting.
    pub fn dismiss(&mut self, now: Instant) {
        self.begin_exit(now);
    }

    /// A dismiss timer fired. Ids other than the live timer are ignored.
    pub fn timer_fired(&mut self, id: TimerId, now: Instant) {
        if self.timer != Some(id) {
            tracing::trace!(timer = id.value(), "stale dismiss timer ignored");
            return;
        }
        self.timer = None;
        // Lets the facility release its bookkeeping for the fired id.
        self.timers.cancel(id);
        tracing::debug!(timer = id.value(), "dismiss timer fired");
        self.begin_exit(now);
    }

    /// Routes a view/timer message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss => self.dismiss(now),
            Message::TimerFired(id) => self.timer_fired(*id, now),
        }
    }

    /// Advances the animations to `now`.
    ///
    /// Returns [`Closed`] when the exit transition completes during this call.
    pub fn tick(&mut self, now: Instant) -> Option<Closed> {
        match &mut self.state {
            State::Hidden | State::Resting { .. } => None,
            State::Entering {
                cycle,
                offset,
                opacity,
            } => {
                self.animation = AnimationState {
                    vertical_offset: offset.value_at(now),
                    opacity: opacity.value_at(now),
                };
                if offset.is_finished(now) && opacity.is_finished(now) {
                    let cycle = *cycle;
                    self.state = State::Resting { cycle };
                    self.animation = AnimationState::RESTING;
                }
                None
            }
            State::Exiting {
                offset, opacity, ..
            } => {
                self.animation = AnimationState {
                    vertical_offset: offset.value_at(now),
                    opacity: opacity.value_at(now),
                };
                let closed = offset.advance(now)?;
                self.state = State::Hidden;
                self.visible = false;
                self.animation.vertical_offset = HIDDEN_OFFSET;
                tracing::debug!(cycle = closed.cycle.value(), "toast closed");
                Some(closed)
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Hidden => Phase::Hidden,
            State::Entering { .. } => Phase::Entering,
            State::Resting { .. } => Phase::Resting,
            State::Exiting { .. } => Phase::Exiting,
        }
    }

    /// Animation values as of the last transition or tick.
    #[must_use]
    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    #[must_use]
    pub fn request(&self) -> Option<&NotificationRequest> {
        self.request.as_ref()
    }

    /// Cycle currently on screen, if any.
    #[must_use]
    pub fn cycle(&self) -> Option<CycleId> {
        match self.state {
            State::Hidden => None,
            State::Entering { cycle, .. }
            | State::Resting { cycle }
            | State::Exiting { cycle, .. } => Some(cycle),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether anything is on screen.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, State::Hidden)
    }

    /// Whether the view needs frames (enter or exit running).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Entering { .. } | State::Exiting { .. })
    }

    /// The live dismiss timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }

    #[must_use]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    fn begin_cycle(&mut self, now: Instant) -> Option<Closed> {
        let superseded = match std::mem::replace(&mut self.state, State::Hidden) {
            State::Exiting { cycle, .. } => {
                tracing::debug!(cycle = cycle.value(), "exit superseded by new toast");
                Some(Closed { cycle })
            }
            _ => None,
        };

        let cycle = self.next_cycle;
        self.next_cycle = cycle.next();
        self.visible = true;
        self.animation = AnimationState::HIDDEN;
        self.state = State::Entering {
            cycle,
            offset: Tween::new(
                HIDDEN_OFFSET,
                RESTING_OFFSET,
                now,
                self.motion.enter,
                self.motion.easing,
            ),
            opacity: Tween::new(0.0, 1.0, now, self.motion.enter, self.motion.easing),
        };

        let duration = self
            .request
            .as_ref()
            .map_or(super::notification::DEFAULT_DURATION, |request| {
                request.duration()
            });
        self.schedule_dismiss(now, duration);
        tracing::debug!(
            cycle = cycle.value(),
            duration_ms = duration.as_millis() as u64,
            "toast shown"
        );
        superseded
    }

    fn begin_exit(&mut self, now: Instant) {
        let cycle = match &self.state {
            State::Entering {
                cycle,
                offset,
                opacity,
            } => {
                self.animation = AnimationState {
                    vertical_offset: offset.value_at(now),
                    opacity: opacity.value_at(now),
                };
                *cycle
            }
            State::Resting { cycle } => *cycle,
            State::Hidden | State::Exiting { .. } => {
                tracing::trace!(phase = ?self.phase(), "dismiss ignored");
                return;
            }
        };

        self.cancel_timer();
        let from = self.animation;
        self.state = State::Exiting {
            cycle,
            offset: Sequence::new(from.vertical_offset, now, self.motion.easing)
                .then(HIDDEN_OFFSET, self.motion.exit)
                .then(HIDDEN_OFFSET, Duration::ZERO)
                .on_complete(Closed { cycle }),
            opacity: Tween::new(from.opacity, 0.0, now, self.motion.exit, self.motion.easing),
        };
        tracing::debug!(cycle = cycle.value(), "toast exiting");
    }

    fn schedule_dismiss(&mut self, now: Instant, duration: Duration) {
        self.cancel_timer();
        self.timer = Some(self.timers.schedule(now, duration));
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.timers.cancel(id);
        }
    }
}

impl<T: TimerFacility> Drop for Lifecycle<T> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::timer::ManualTimers;
    use crate::ui::notifications::Kind;
    use approx::assert_abs_diff_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Fires due timers then ticks, like a host event loop would.
    fn step(lifecycle: &mut Lifecycle<ManualTimers>, now: Instant) -> Option<Closed> {
        for id in lifecycle.timers_mut().due(now) {
            lifecycle.timer_fired(id, now);
        }
        lifecycle.tick(now)
    }

    fn saved() -> NotificationRequest {
        NotificationRequest::success("Saved", "Your changes were saved")
    }

    #[test]
    fn starts_hidden() {
        let lifecycle = Lifecycle::new(ManualTimers::new());
        assert_eq!(lifecycle.phase(), Phase::Hidden);
        assert_eq!(lifecycle.animation(), AnimationState::HIDDEN);
        assert!(lifecycle.pending_timer().is_none());
        assert!(!lifecycle.is_active());
    }

    #[test]
    fn show_enters_and_schedules_timer() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        assert_eq!(lifecycle.show(saved(), t0), None);

        assert_eq!(lifecycle.phase(), Phase::Entering);
        let timer = lifecycle.pending_timer().expect("timer scheduled");
        assert_eq!(lifecycle.timers().deadline(timer), Some(t0 + ms(4000)));
        assert_eq!(lifecycle.animation(), AnimationState::HIDDEN);
    }

    #[test]
    fn enter_animation_reaches_rest_after_300ms() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);

        step(&mut lifecycle, t0 + ms(150));
        let mid = lifecycle.animation();
        assert!(mid.vertical_offset > HIDDEN_OFFSET && mid.vertical_offset < RESTING_OFFSET);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        step(&mut lifecycle, t0 + ms(300));
        assert_eq!(lifecycle.phase(), Phase::Resting);
        assert_abs_diff_eq!(lifecycle.animation().vertical_offset, 0.0);
        assert_abs_diff_eq!(lifecycle.animation().opacity, 1.0);
    }

    #[test]
    fn auto_dismiss_closes_once_after_duration() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);

        let mut closes = 0;
        let mut t = t0;
        while t <= t0 + ms(6000) {
            if let Some(closed) = step(&mut lifecycle, t) {
                assert!(t >= t0 + ms(4300), "closed too early at {:?}", t - t0);
                assert_eq!(closed.cycle, CycleId::first());
                closes += 1;
            }
            if t < t0 + ms(4000) {
                assert_ne!(lifecycle.phase(), Phase::Exiting);
            }
            t += ms(10);
        }
        assert_eq!(closes, 1);
        assert_eq!(lifecycle.phase(), Phase::Hidden);
        assert!(!lifecycle.is_visible());
    }

    #[test]
    fn manual_dismiss_cancels_timer_and_closes_within_exit_duration() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        step(&mut lifecycle, t0 + ms(300));

        let timer = lifecycle.pending_timer().expect("timer scheduled");
        lifecycle.dismiss(t0 + ms(1000));
        assert_eq!(lifecycle.phase(), Phase::Exiting);
        assert!(!lifecycle.timers().is_pending(timer));
        assert_eq!(lifecycle.timers().cancelled_count(), 1);

        assert_eq!(step(&mut lifecycle, t0 + ms(1299)), None);
        assert_eq!(
            step(&mut lifecycle, t0 + ms(1300)),
            Some(Closed {
                cycle: CycleId::first()
            })
        );

        for extra in [4000, 4300, 10_000] {
            assert_eq!(step(&mut lifecycle, t0 + ms(extra)), None);
        }
    }

    #[test]
    fn exit_animates_offset_and_opacity_to_hidden() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        step(&mut lifecycle, t0 + ms(300));
        lifecycle.dismiss(t0 + ms(500));

        step(&mut lifecycle, t0 + ms(650));
        let mid = lifecycle.animation();
        assert!(mid.vertical_offset < 0.0 && mid.vertical_offset > HIDDEN_OFFSET);
        assert!(mid.opacity < 1.0 && mid.opacity > 0.0);

        assert!(step(&mut lifecycle, t0 + ms(800)).is_some());
        assert_abs_diff_eq!(lifecycle.animation().vertical_offset, HIDDEN_OFFSET);
        assert_abs_diff_eq!(lifecycle.animation().opacity, 0.0);
    }

    #[test]
    fn dismiss_during_enter_starts_from_current_values() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        step(&mut lifecycle, t0 + ms(150));
        let at_dismiss = lifecycle.animation();

        lifecycle.dismiss(t0 + ms(150));
        step(&mut lifecycle, t0 + ms(150));
        assert_abs_diff_eq!(
            lifecycle.animation().vertical_offset,
            at_dismiss.vertical_offset,
            epsilon = 1e-4
        );
        assert!(step(&mut lifecycle, t0 + ms(450)).is_some());
    }

    #[test]
    fn repeated_dismiss_is_a_noop() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.dismiss(t0);
        assert_eq!(lifecycle.phase(), Phase::Hidden);

        lifecycle.show(saved(), t0);
        lifecycle.dismiss(t0 + ms(100));
        lifecycle.dismiss(t0 + ms(200));
        assert_eq!(step(&mut lifecycle, t0 + ms(400)), Some(Closed { cycle: CycleId::first() }));

        lifecycle.dismiss(t0 + ms(500));
        assert_eq!(step(&mut lifecycle, t0 + ms(900)), None);
    }

    #[test]
    fn stale_timer_id_is_ignored() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        let first = lifecycle.pending_timer().expect("first timer");
        lifecycle.dismiss(t0 + ms(100));
        step(&mut lifecycle, t0 + ms(400));

        lifecycle.show(saved(), t0 + ms(500));
        lifecycle.timer_fired(first, t0 + ms(4000));
        assert_ne!(lifecycle.phase(), Phase::Exiting);
    }

    #[test]
    fn showing_same_content_twice_does_not_restart() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        let timer = lifecycle.pending_timer();

        lifecycle.show(saved(), t0 + ms(1000));
        assert_eq!(lifecycle.pending_timer(), timer);
        assert_eq!(lifecycle.timers().scheduled_count(), 1);
    }

    #[test]
    fn new_content_while_resting_restarts_timer_only() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        step(&mut lifecycle, t0 + ms(300));
        let cycle = lifecycle.cycle();

        let other = NotificationRequest::error("Oops", "Payment failed").with_duration(ms(2000));
        assert_eq!(lifecycle.show(other, t0 + ms(1000)), None);

        assert_eq!(lifecycle.phase(), Phase::Resting);
        assert_eq!(lifecycle.cycle(), cycle);
        assert_eq!(lifecycle.request().map(NotificationRequest::kind), Some(Kind::Error));
        let timer = lifecycle.pending_timer().expect("rescheduled");
        assert_eq!(lifecycle.timers().deadline(timer), Some(t0 + ms(3000)));
        assert_eq!(lifecycle.timers().pending_count(), 1);
    }

    #[test]
    fn show_during_exit_resolves_previous_cycle() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        lifecycle.dismiss(t0 + ms(400));
        step(&mut lifecycle, t0 + ms(500));

        let superseded = lifecycle.show(saved(), t0 + ms(550));
        assert_eq!(superseded, Some(Closed { cycle: CycleId::first() }));
        assert_eq!(lifecycle.phase(), Phase::Entering);
        assert_eq!(lifecycle.animation(), AnimationState::HIDDEN);
        assert_eq!(lifecycle.cycle(), Some(CycleId::first().next()));

        // The superseded exit never reports again.
        for t in (600..=2000).step_by(50) {
            assert_eq!(step(&mut lifecycle, t0 + ms(t)), None);
        }
    }

    #[test]
    fn host_hiding_runs_exit_transition() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.set_request(saved());
        lifecycle.set_visible(true, t0);
        step(&mut lifecycle, t0 + ms(300));

        assert_eq!(lifecycle.set_visible(false, t0 + ms(1000)), None);
        assert_eq!(lifecycle.phase(), Phase::Exiting);
        assert!(lifecycle.pending_timer().is_none());
        assert!(step(&mut lifecycle, t0 + ms(1300)).is_some());
    }

    #[test]
    fn visible_edge_without_content_is_ignored() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        assert_eq!(lifecycle.set_visible(true, t0), None);
        assert_eq!(lifecycle.phase(), Phase::Hidden);
        assert!(!lifecycle.is_visible());
    }

    #[test]
    fn staying_visible_does_not_restart_cycle() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.set_request(saved());
        lifecycle.set_visible(true, t0);
        lifecycle.set_visible(true, t0 + ms(200));
        assert_eq!(lifecycle.timers().scheduled_count(), 1);
        assert_eq!(lifecycle.cycle(), Some(CycleId::first()));
    }

    #[test]
    fn drop_cancels_live_timer() {
        #[derive(Debug)]
        struct Recorder {
            inner: ManualTimers,
            cancels: std::rc::Rc<std::cell::Cell<usize>>,
        }

        impl TimerFacility for Recorder {
            fn schedule(&mut self, now: Instant, delay: Duration) -> TimerId {
                self.inner.schedule(now, delay)
            }

            fn cancel(&mut self, id: TimerId) {
                self.cancels.set(self.cancels.get() + 1);
                self.inner.cancel(id);
            }
        }

        let cancels = std::rc::Rc::new(std::cell::Cell::new(0));
        {
            let mut lifecycle = Lifecycle::new(Recorder {
                inner: ManualTimers::new(),
                cancels: cancels.clone(),
            });
            lifecycle.show(saved(), Instant::now());
            assert_eq!(cancels.get(), 0);
        }
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn handle_message_routes_dismiss_and_timer() {
        let t0 = Instant::now();
        let mut lifecycle = Lifecycle::new(ManualTimers::new());
        lifecycle.show(saved(), t0);
        let timer = lifecycle.pending_timer().expect("timer");

        lifecycle.handle_message(&Message::TimerFired(timer), t0 + ms(4000));
        assert_eq!(lifecycle.phase(), Phase::Exiting);

        lifecycle.show(saved(), t0 + ms(4100));
        lifecycle.handle_message(&Message::Dismiss, t0 + ms(4200));
        assert_eq!(lifecycle.phase(), Phase::Exiting);
    }
}
