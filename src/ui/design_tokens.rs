// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the storefront and the toast overlay.
//!
//! Screens read colors through [`crate::ui::theming::ColorScheme`]; the toast
//! reads the semantic accents directly since it looks the same in both
//! themes. Lengths are logical pixels on a 4px step.
//!
//! ```
//! use iced_toast::ui::design_tokens::{palette, sizing, spacing};
//!
//! let resting_top = sizing::TOAST_TOP_INSET;
//! let gutter = spacing::MD;
//! assert!(resting_top > gutter);
//! assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Warm neutrals, darkest first.
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.10, 0.09);
    pub const GRAY_700: Color = Color::from_rgb(0.32, 0.30, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.46, 0.44, 0.42);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.76, 0.73);
    pub const GRAY_100: Color = Color::from_rgb(0.90, 0.88, 0.85);

    /// Storefront brand blue, used for prices and the cart badge.
    pub const PRIMARY_500: Color = Color::from_rgb(0.18, 0.46, 0.82);
    /// Brand blue lifted for dark surfaces.
    pub const PRIMARY_400: Color = Color::from_rgb(0.42, 0.66, 0.96);

    // Toast accents, one per notification kind.
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Toast card backgrounds.
    pub const SUCCESS_50: Color = Color::from_rgb(0.925, 0.976, 0.937);
    pub const ERROR_50: Color = Color::from_rgb(0.992, 0.929, 0.929);
    pub const INFO_50: Color = Color::from_rgb(0.929, 0.949, 1.0);
}

pub mod opacity {
    /// Product card fill over the page background.
    pub const SURFACE: f32 = 0.95;
    /// Toast shadow and hovered close button.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Pressed close button.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const PRODUCT_CARD_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 420.0;

    /// Distance between the window top and a resting toast.
    pub const TOAST_TOP_INSET: f32 = 48.0;
}

pub mod typography {
    /// Storefront heading.
    pub const TITLE_LG: f32 = 30.0;
    /// Product names.
    pub const TITLE_SM: f32 = 18.0;
    /// Toast titles.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Product descriptions.
    pub const BODY_SM: f32 = 13.0;
}

pub mod border {
    /// Product card outline.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent outline.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toast card elevation. Callers set the color alpha.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS * 2.0 == spacing::XS);
    assert!(spacing::XS < spacing::SM && spacing::SM < spacing::MD && spacing::MD < spacing::LG);

    assert!(sizing::ICON_SM < sizing::ICON_MD);
    assert!(sizing::TOAST_TOP_INSET > spacing::LG);
    assert!(sizing::PRODUCT_CARD_WIDTH < sizing::TOAST_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY && typography::BODY > typography::BODY_SM);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE < 1.0);
    assert!(border::WIDTH_SM < border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(color: Color) -> f32 {
        color.r + color.g + color.b
    }

    #[test]
    fn neutrals_get_lighter_as_the_step_drops() {
        let steps = [
            palette::GRAY_900,
            palette::GRAY_700,
            palette::GRAY_400,
            palette::GRAY_200,
            palette::GRAY_100,
        ];
        for pair in steps.windows(2) {
            assert!(luminance(pair[0]) < luminance(pair[1]));
        }
    }

    #[test]
    fn semantic_tints_are_lighter_than_accents() {
        for (tint, accent) in [
            (palette::ERROR_50, palette::ERROR_500),
            (palette::SUCCESS_50, palette::SUCCESS_500),
            (palette::INFO_50, palette::INFO_500),
        ] {
            assert!(luminance(tint) > luminance(accent));
        }
    }
}
