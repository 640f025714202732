// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::ANIMATION_FRAME_MS;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the animation tick subscription.
///
/// Frames are only requested while the toast enters or exits; a resting toast
/// waits on its dismiss timer instead.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
