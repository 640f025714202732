// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.
//!
//! The toast is a card with a kind-colored accent, an icon, a title, a message
//! and a close button. It is laid out near the top of the window, inset
//! horizontally, and meant to be stacked above the screen content. The
//! vertical offset slides the card through a [`float`] translation, so a
//! hidden card sits entirely above the viewport.

use super::lifecycle::{AnimationState, Lifecycle, Message};
use super::notification::{Kind, NotificationRequest};
use super::timer::TimerFacility;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons::{self, Icon};
use iced::widget::{button, container, float, svg, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Shadow, Theme, Vector};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the toast card for `request` with the given animation values.
    pub fn view(request: &NotificationRequest, animation: AnimationState) -> Element<'_, Message> {
        let kind = request.kind();
        let alpha = animation.opacity.clamp(0.0, 1.0);
        let accent = fade(kind.color(), alpha);
        let title_color = fade(palette::GRAY_900, alpha);
        let body_color = fade(palette::GRAY_700, alpha);

        let icon = icons::sized(Self::kind_icon(kind).svg(), sizing::ICON_MD)
            .style(move |_theme: &Theme, _status| svg::Style {
                color: Some(accent),
            });

        let text_column = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(
                Text::new(request.title())
                    .size(typography::BODY_LG)
                    .color(title_color),
            )
            .push(
                Text::new(request.message())
                    .size(typography::BODY)
                    .color(body_color),
            );

        let close_icon = icons::sized(Icon::Cross.svg(), sizing::ICON_SM)
            .style(move |_theme: &Theme, _status| svg::Style {
                color: Some(title_color),
            });
        let dismiss_button = button(close_icon)
            .on_press(Message::Dismiss)
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        // Layout: [icon] [title / message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(text_column)
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::TOAST_WIDTH)
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(kind, alpha))
            .into()
    }

    /// Renders the overlay layer for `lifecycle`.
    ///
    /// Returns an empty layer while nothing is on screen, including a card
    /// faded to zero opacity. The layer itself does not capture input, so
    /// content below stays interactive.
    pub fn view_overlay<T: TimerFacility>(lifecycle: &Lifecycle<T>) -> Element<'_, Message> {
        let animation = lifecycle.animation();
        let Some(request) = lifecycle
            .request()
            .filter(|_| lifecycle.is_active() && animation.opacity > 0.0)
        else {
            return Space::new().into();
        };

        let offset = animation.vertical_offset;
        let card = float(Self::view(request, animation))
            .translate(move |bounds, viewport| {
                Vector::new(0.0, slide_distance(offset, bounds.y + bounds.height - viewport.y))
            });

        Column::new()
            .push(Space::new().height(Length::Fixed(sizing::TOAST_TOP_INSET)))
            .push(
                Container::new(card)
                    .width(Length::Fill)
                    .padding([0.0, spacing::MD])
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Returns the icon for the notification kind.
    #[must_use]
    pub fn kind_icon(kind: Kind) -> Icon {
        match kind {
            Kind::Success => Icon::Checkmark,
            Kind::Error => Icon::Alert,
            Kind::Info => Icon::Info,
        }
    }
}

/// Vertical translation for an offset in `-100..=0`.
///
/// `-100` moves a card whose bottom edge sits `card_bottom` below the
/// viewport top fully out of view; `0` leaves it in place.
fn slide_distance(vertical_offset: f32, card_bottom: f32) -> f32 {
    vertical_offset.clamp(-100.0, 0.0) / 100.0 * card_bottom.max(0.0)
}

/// Scales a color's alpha by the toast opacity.
fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(kind: Kind, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(kind.background(), alpha))),
        border: Border {
            color: fade(kind.color(), alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::BLACK
            },
            ..shadow::MD
        },
        text_color: Some(fade(palette::GRAY_900, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = fade(palette::GRAY_900, alpha);
    let hover_background = |strength: f32| {
        Some(Background::Color(Color {
            a: strength * alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: fade(text_color, opacity::OVERLAY_MEDIUM),
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::ManualTimers;
    use approx::assert_abs_diff_eq;
    use std::time::{Duration, Instant};

    #[test]
    fn toast_container_style_uses_kind_accent() {
        let style = toast_container_style(Kind::Error, 1.0);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_50))
        );
    }

    #[test]
    fn container_fades_with_opacity() {
        let style = toast_container_style(Kind::Success, 0.25);
        assert_abs_diff_eq!(style.border.color.a, 0.25);
        assert_abs_diff_eq!(style.shadow.color.a, opacity::OVERLAY_SUBTLE * 0.25);
    }

    #[test]
    fn fade_scales_existing_alpha() {
        let half = Color {
            a: 0.5,
            ..palette::INFO_500
        };
        assert_abs_diff_eq!(fade(half, 0.5).a, 0.25);
        assert_eq!(fade(half, 0.5).r, half.r);
    }

    #[test]
    fn kind_selects_matching_icon() {
        assert_eq!(Toast::kind_icon(Kind::Success), Icon::Checkmark);
        assert_eq!(Toast::kind_icon(Kind::Error), Icon::Alert);
        assert_eq!(Toast::kind_icon(Kind::Info), Icon::Info);
        assert_eq!(Toast::kind_icon(Kind::parse("warning")), Icon::Info);
    }

    #[test]
    fn slide_distance_spans_card_bottom() {
        assert_abs_diff_eq!(slide_distance(0.0, 120.0), 0.0);
        assert_abs_diff_eq!(slide_distance(-50.0, 120.0), -60.0);
        assert_abs_diff_eq!(slide_distance(-100.0, 120.0), -120.0);
        assert_abs_diff_eq!(slide_distance(-250.0, 120.0), -120.0);
    }

    #[test]
    fn overlay_renders_for_hidden_and_active_lifecycles() {
        let mut lifecycle = crate::ui::notifications::Lifecycle::new(ManualTimers::new());
        drop(Toast::view_overlay(&lifecycle));

        let start = Instant::now();
        let _ = lifecycle.show(
            NotificationRequest::info("Heads up", "Store closes at 6pm"),
            start,
        );
        let _ = lifecycle.tick(start + Duration::from_millis(150));
        drop(Toast::view_overlay(&lifecycle));
    }

    #[test]
    fn dismiss_button_is_transparent_when_idle() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Active, 1.0);
        assert!(style.background.is_none());
    }
}
