// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The storefront fills the window and the toast overlay is stacked above it.

use super::i18n::fluent::I18n;
use super::{Message, ToastLifecycle};
use crate::ui::notifications::Toast;
use crate::ui::storefront::{self, Product};
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub products: &'a [Product],
    pub cart_count: usize,
    pub toast: &'a ToastLifecycle,
}

/// Renders the storefront with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = storefront::view(storefront::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        products: ctx.products,
        cart_count: ctx.cart_count,
    })
    .map(Message::Storefront);

    let overlay = Toast::view_overlay(ctx.toast).map(Message::Notification);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(overlay);

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
