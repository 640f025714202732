// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` from
//! `assets/icons/` and handles are cached using `OnceLock`. Every icon is a
//! single-color glyph; callers tint it through `svg::Style::color`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close_button = button(icons::sized(icons::cross(), sizing::ICON_SM));
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_toast`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Notification Icons
// =============================================================================

define_icon!(
    checkmark,
    "checkmark.svg",
    "Checkmark icon: tick inside a filled circle."
);
define_icon!(
    alert,
    "alert.svg",
    "Alert icon: exclamation mark inside a filled circle."
);
define_icon!(
    info,
    "info.svg",
    "Info icon: letter i inside a filled circle."
);
define_icon!(cross, "cross.svg", "Cross icon: X shape for close actions.");

// =============================================================================
// Storefront Icons
// =============================================================================

define_icon!(cart, "cart.svg", "Cart icon: shopping cart with two wheels.");

// =============================================================================
// Icon Selection
// =============================================================================

/// Names an icon so callers can pick one by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Checkmark,
    Alert,
    Info,
    Cross,
    Cart,
}

impl Icon {
    #[must_use]
    pub fn svg<'a>(self) -> Svg<'a> {
        match self {
            Icon::Checkmark => checkmark(),
            Icon::Alert => alert(),
            Icon::Info => info(),
            Icon::Cross => cross(),
            Icon::Cart => cart(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = checkmark();
        let _ = alert();
        let _ = info();
        let _ = cross();
        let _ = cart();
    }

    #[test]
    fn every_named_icon_resolves() {
        for icon in [Icon::Checkmark, Icon::Alert, Icon::Info, Icon::Cross, Icon::Cart] {
            let _ = sized(icon.svg(), 32.0);
        }
    }
}
