// SPDX-License-Identifier: MPL-2.0
//! Time-based animation primitives for the toast overlay.
//!
//! Animations are sampled, not pushed: every primitive stores its start
//! instant and computes its value for any `now` the caller passes in. This
//! keeps them deterministic under test and independent from the renderer.
//!
//! - [`Tween`] animates one value between two endpoints.
//! - [`Sequence`] chains [`Step`]s back-to-back on the same value and carries
//!   a single completion payload, released by the terminal step only.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Interpolation curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// Slow start and end, fast middle (cubic).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Linear progress of `elapsed` over `duration`, saturating at 1.
fn progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A single value animated from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Samples the value at `now`. Before `start` this is `from`, after the
    /// end it is exactly `to`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = progress(self.start, self.duration, now);
        if t >= 1.0 {
            self.to
        } else {
            lerp(self.from, self.to, self.easing.apply(t))
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.end()
    }

    #[must_use]
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }
}

/// One timed segment of a [`Sequence`]. A zero duration is a hold that
/// completes as soon as the previous step does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub to: f32,
    pub duration: Duration,
}

/// Ordered steps animating one value back-to-back, with a completion payload
/// attached to the last step.
///
/// The payload lives in an `Option` and is moved out by [`Sequence::advance`]
/// the first time the terminal step is reached, so it can only be observed
/// once.
#[derive(Debug, Clone)]
pub struct Sequence<C> {
    origin: f32,
    start: Instant,
    easing: Easing,
    steps: Vec<Step>,
    completion: Option<C>,
}

impl<C> Sequence<C> {
    /// Starts an empty sequence holding `origin` from `start`.
    #[must_use]
    pub fn new(origin: f32, start: Instant, easing: Easing) -> Self {
        Self {
            origin,
            start,
            easing,
            steps: Vec::new(),
            completion: None,
        }
    }

    /// Appends a step that animates to `to` over `duration`.
    #[must_use]
    pub fn then(mut self, to: f32, duration: Duration) -> Self {
        self.steps.push(Step { to, duration });
        self
    }

    /// Attaches the payload released when the terminal step completes.
    #[must_use]
    pub fn on_complete(mut self, completion: C) -> Self {
        self.completion = Some(completion);
        self
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Instant at which the terminal step completes.
    #[must_use]
    pub fn end(&self) -> Instant {
        self.start + self.steps.iter().map(|step| step.duration).sum::<Duration>()
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.end()
    }

    /// Samples the value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let mut value = self.origin;
        let mut step_start = self.start;
        for step in &self.steps {
            let step_end = step_start + step.duration;
            if now < step_end {
                let t = progress(step_start, step.duration, now);
                return lerp(value, step.to, self.easing.apply(t));
            }
            value = step.to;
            step_start = step_end;
        }
        value
    }

    /// Releases the completion payload once the terminal step has completed.
    ///
    /// Returns `None` before the end and on every call after the first
    /// release.
    pub fn advance(&mut self, now: Instant) -> Option<C> {
        if self.is_finished(now) {
            self.completion.take()
        } else {
            None
        }
    }
}
