// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `NotificationRequest` handed over by the host and
//! the `Kind` enum that selects its palette and icon.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Auto-dismiss delay used when the host does not pick one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Identifies one display cycle (show → exit → closed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleId(u64);

impl CycleId {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Semantic category controlling color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed (green, checkmark).
    Success,
    /// Operation failed (red, alert).
    Error,
    /// Neutral message (blue, info). Also used for any unrecognized kind.
    #[default]
    Info,
}

impl Kind {
    /// Parses a kind name, falling back to [`Kind::Info`] for anything unknown.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Kind::Success,
            "error" => Kind::Error,
            _ => Kind::Info,
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Returns the tinted background used behind the toast content.
    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_50,
            Kind::Error => palette::ERROR_50,
            Kind::Info => palette::INFO_50,
        }
    }
}

impl From<&str> for Kind {
    fn from(raw: &str) -> Self {
        Kind::parse(raw)
    }
}

/// Content of a toast, supplied by the host and replaced wholesale on each show.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    kind: Kind,
    title: String,
    message: String,
    duration: Duration,
}

impl NotificationRequest {
    /// Creates a request with the default auto-dismiss duration.
    pub fn new(kind: Kind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Creates a success request.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Success, title, message)
    }

    /// Creates an error request.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Error, title, message)
    }

    /// Creates an info request.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Info, title, message)
    }

    /// Overrides the auto-dismiss duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_recognizes_known_names() {
        assert_eq!(Kind::parse("success"), Kind::Success);
        assert_eq!(Kind::parse("Error"), Kind::Error);
        assert_eq!(Kind::parse(" info "), Kind::Info);
    }

    #[test]
    fn unknown_or_empty_kind_falls_back_to_info() {
        assert_eq!(Kind::parse("warning"), Kind::Info);
        assert_eq!(Kind::parse(""), Kind::Info);
        assert_eq!(Kind::from("definitely-not-a-kind"), Kind::Info);
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(Kind::Success.color(), Kind::Error.color());
        assert_ne!(Kind::Success.color(), Kind::Info.color());
        assert_ne!(Kind::Error.color(), Kind::Info.color());
    }

    #[test]
    fn error_kind_uses_red_palette() {
        let color = Kind::Error.color();
        assert!(color.r > color.g && color.r > color.b);
    }

    #[test]
    fn request_defaults_to_four_seconds() {
        let request = NotificationRequest::success("Saved", "Your changes were saved");
        assert_eq!(request.duration(), Duration::from_millis(4000));
        assert_eq!(request.kind(), Kind::Success);
        assert_eq!(request.title(), "Saved");
        assert_eq!(request.message(), "Your changes were saved");
    }

    #[test]
    fn with_duration_overrides_default() {
        let request =
            NotificationRequest::info("Hi", "there").with_duration(Duration::from_millis(1500));
        assert_eq!(request.duration(), Duration::from_millis(1500));
    }

    #[test]
    fn cycle_ids_increase() {
        let first = CycleId::first();
        assert!(first.next() > first);
        assert_eq!(first.next().value(), 2);
    }
}
