// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notification**: Auto-dismiss duration bounds
//! - **Animation**: Enter/exit animation duration bounds
//! - **Window**: Default and minimum window size

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss duration for toasts (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 4000;

/// Minimum auto-dismiss duration (in milliseconds).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Maximum auto-dismiss duration (in milliseconds).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of the toast enter and exit animations (in milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Maximum animation duration (in milliseconds). Zero disables the animation.
pub const MAX_ANIMATION_MS: u64 = 2000;

/// Frame interval used while a toast animates (in milliseconds, ~60 fps).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS <= DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
