// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler mutates the borrowed state in [`UpdateContext`]. Timer tasks
//! scheduled by the toast lifecycle are collected by the caller afterwards.

use super::config::{self, Config};
use super::i18n::fluent::I18n;
use super::ToastLifecycle;
use crate::ui::notifications::{Closed, CycleId, NotificationMessage, NotificationRequest};
use crate::ui::storefront::{self, Product};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub(super) struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub config_dir: &'a Option<PathBuf>,
    pub products: &'a [Product],
    pub cart_count: &'a mut usize,
    pub toast: &'a mut ToastLifecycle,
    pub last_closed: &'a mut Option<CycleId>,
}

pub(super) fn handle_storefront_message(
    ctx: &mut UpdateContext<'_>,
    message: storefront::Message,
    now: Instant,
) {
    match storefront::update(&message, ctx.products) {
        storefront::Event::None => {}
        storefront::Event::AddedToCart(product) => {
            *ctx.cart_count += 1;
            let name = ctx.i18n.tr(product.name_key);
            let request = NotificationRequest::success(
                ctx.i18n.tr("toast-cart-added-title"),
                ctx.i18n
                    .tr_with_args("toast-cart-added-message", &[("product", &name)]),
            );
            show_toast(ctx, request, now);
        }
        storefront::Event::CheckoutRequested => {
            let request = if *ctx.cart_count == 0 {
                NotificationRequest::info(
                    ctx.i18n.tr("toast-checkout-empty-title"),
                    ctx.i18n.tr("toast-checkout-empty-message"),
                )
            } else {
                NotificationRequest::error(
                    ctx.i18n.tr("toast-checkout-failed-title"),
                    ctx.i18n.tr("toast-checkout-failed-message"),
                )
            };
            show_toast(ctx, request, now);
        }
        storefront::Event::SaveProfileRequested => {
            let request = match config::save_with_override(ctx.config, ctx.config_dir.clone()) {
                Ok(()) => NotificationRequest::success(
                    ctx.i18n.tr("toast-profile-saved-title"),
                    ctx.i18n.tr("toast-profile-saved-message"),
                ),
                Err(err) => {
                    tracing::error!(error = %err, "failed to save settings");
                    NotificationRequest::error(
                        ctx.i18n.tr("toast-settings-title"),
                        ctx.i18n.tr("notification-config-save-error"),
                    )
                }
            };
            show_toast(ctx, request, now);
        }
        storefront::Event::AboutRequested => {
            let request = NotificationRequest::info(
                ctx.i18n.tr("toast-about-title"),
                ctx.i18n.tr("toast-about-message"),
            );
            show_toast(ctx, request, now);
        }
    }
}

pub(super) fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
    now: Instant,
) {
    ctx.toast.handle_message(message, now);
    // A zero-length exit resolves on the spot.
    if let Some(closed) = ctx.toast.tick(now) {
        record_closed(ctx, closed);
    }
}

pub(super) fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    if let Some(closed) = ctx.toast.tick(now) {
        record_closed(ctx, closed);
    }
}

/// Shows `request` with the configured duration.
pub(super) fn show_toast(ctx: &mut UpdateContext<'_>, request: NotificationRequest, now: Instant) {
    let request = request.with_duration(ctx.config.notifications.duration());
    show_request(ctx, request, now);
}

/// Shows `request` as is, keeping its own duration.
pub(super) fn show_request(
    ctx: &mut UpdateContext<'_>,
    request: NotificationRequest,
    now: Instant,
) {
    if let Some(closed) = ctx.toast.show(request, now) {
        record_closed(ctx, closed);
    }
}

fn record_closed(ctx: &mut UpdateContext<'_>, closed: Closed) {
    tracing::info!(cycle = closed.cycle.value(), "notification closed");
    *ctx.last_closed = Some(closed.cycle);
}
