// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::storefront;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Storefront(storefront::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Animation frame while the toast enters or exits
}

/// Runtime flags passed in from the launcher to initialize the app state.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Toast shown at launch, if any.
    pub startup_toast: Option<StartupToast>,
}

/// Toast requested from the command line (`--kind/--title/--message/--duration`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StartupToast {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration_ms: Option<u64>,
}

impl StartupToast {
    /// Returns `None` when no toast field was given.
    #[must_use]
    pub fn from_parts(
        kind: Option<String>,
        title: Option<String>,
        message: Option<String>,
        duration_ms: Option<u64>,
    ) -> Option<Self> {
        if kind.is_none() && title.is_none() && message.is_none() && duration_ms.is_none() {
            return None;
        }
        Some(Self {
            kind,
            title,
            message,
            duration_ms,
        })
    }
}
