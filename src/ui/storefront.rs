// SPDX-License-Identifier: MPL-2.0
//! Storefront screen: a small product catalog with a cart counter.
//!
//! The screen only emits intents. Whatever feedback they produce (cart
//! updates, toasts, saved settings) is decided by the parent application.

use crate::app::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, container, scrollable,
        scrollable::{Direction, Scrollbar},
        svg, Column, Container, Row, Space, Text,
    },
    Background, Border, Element, Length, Theme,
};

/// A product listed on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Fluent key of the display name.
    pub name_key: &'static str,
    /// Fluent key of the one-line description.
    pub description_key: &'static str,
    pub price_cents: u32,
}

impl Product {
    /// Price formatted with two decimals, e.g. `49.00`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

pub const CATALOG: [Product; 3] = [
    Product {
        name_key: "product-lamp-name",
        description_key: "product-lamp-description",
        price_cents: 4900,
    },
    Product {
        name_key: "product-notebook-name",
        description_key: "product-notebook-description",
        price_cents: 1450,
    },
    Product {
        name_key: "product-mug-name",
        description_key: "product-mug-description",
        price_cents: 1800,
    },
];

/// Contextual data needed to render the storefront.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub products: &'a [Product],
    pub cart_count: usize,
}

/// Messages emitted by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AddToCart(usize),
    Checkout,
    SaveProfile,
    About,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    AddedToCart(Product),
    CheckoutRequested,
    SaveProfileRequested,
    AboutRequested,
}

/// Process a storefront message and return the corresponding event.
///
/// An out-of-range product index yields [`Event::None`].
#[must_use]
pub fn update(message: &Message, products: &[Product]) -> Event {
    match message {
        Message::AddToCart(index) => products
            .get(*index)
            .copied()
            .map_or(Event::None, Event::AddedToCart),
        Message::Checkout => Event::CheckoutRequested,
        Message::SaveProfile => Event::SaveProfileRequested,
        Message::About => Event::AboutRequested,
    }
}

/// Render the storefront screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = build_header(&ctx);

    let cards = ctx
        .products
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::MD), |row, (index, product)| {
            row.push(build_product_card(&ctx, index, product))
        });

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("button-checkout")).size(typography::BODY))
                .on_press(Message::Checkout),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-save-profile")).size(typography::BODY))
                .on_press(Message::SaveProfile)
                .style(button::secondary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("button-about")).size(typography::BODY))
                .on_press(Message::About)
                .style(button::text),
        );

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(Horizontal::Left)
        .push(header)
        .push(scrollable(cards).direction(Direction::Horizontal(Scrollbar::new())))
        .push(actions);

    let background = ctx.colors.surface_primary;
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}

/// Build the header with title, subtitle and cart counter.
fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let text_primary = ctx.colors.text_primary;
    let text_secondary = ctx.colors.text_secondary;
    let brand = ctx.colors.brand_primary;

    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("storefront-heading"))
                .size(typography::TITLE_LG)
                .color(text_primary),
        )
        .push(
            Text::new(ctx.i18n.tr("storefront-subtitle"))
                .size(typography::BODY)
                .color(text_secondary),
        );

    let count = ctx.cart_count.to_string();
    let cart = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            icons::sized(icons::cart(), sizing::ICON_MD).style(move |_theme: &Theme, _status| {
                svg::Style { color: Some(brand) }
            }),
        )
        .push(
            Text::new(ctx.i18n.tr_with_args("cart-count", &[("count", &count)]))
                .size(typography::BODY_LG)
                .color(text_primary),
        );

    Row::new()
        .align_y(Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(cart)
        .into()
}

/// Build a single product card.
fn build_product_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    product: &Product,
) -> Element<'a, Message> {
    let colors = ctx.colors.clone();

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr(product.name_key))
                .size(typography::TITLE_SM)
                .color(colors.text_primary),
        )
        .push(
            Text::new(ctx.i18n.tr(product.description_key))
                .size(typography::BODY_SM)
                .color(colors.text_secondary),
        )
        .push(
            Text::new(product.price_label())
                .size(typography::BODY_LG)
                .color(colors.brand_primary),
        )
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(
            button(Text::new(ctx.i18n.tr("button-add-to-cart")).size(typography::BODY))
                .on_press(Message::AddToCart(index))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::PRODUCT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.surface_card)),
            border: Border {
                color: colors.card_border,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}
