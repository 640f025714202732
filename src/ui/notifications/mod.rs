// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single toast slides in from the top of the window, waits for its
//! duration and slides out again, unless the user closes it first. There is no
//! queue and no stacking: showing new content replaces what is on screen.
//!
//! # Components
//!
//! - [`notification`] - `NotificationRequest` and its `Kind`
//! - [`animation`] - sampled tweens and step sequences
//! - [`timer`] - dismiss timer facilities (Iced tasks, virtual clock)
//! - [`lifecycle`] - the `Lifecycle` state machine
//! - `toast` - Toast widget rendering the current lifecycle
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Lifecycle, NotificationRequest, TaskTimers, Toast};
//!
//! // Own one lifecycle next to your screen state
//! let mut toast = Lifecycle::new(TaskTimers::new(NotificationMessage::TimerFired));
//!
//! // Show a toast and hand the timer task back to the runtime
//! toast.show(NotificationRequest::success(title, message), Instant::now());
//! let task = toast.timers_mut().take_tasks().map(Message::Notification);
//!
//! // In your view function, stack the overlay above the screen
//! let overlay = Toast::view_overlay(&toast).map(Message::Notification);
//! ```

pub mod animation;
pub mod lifecycle;
pub mod notification;
pub mod timer;
mod toast;

pub use animation::Easing;
pub use lifecycle::{
    AnimationState, Closed, Lifecycle, Message as NotificationMessage, Motion, Phase,
};
pub use notification::{CycleId, Kind, NotificationRequest, DEFAULT_DURATION};
pub use timer::{ManualTimers, TaskTimers, TimerFacility, TimerId};
pub use toast::Toast;
