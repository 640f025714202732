// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a storefront shell showing one animated, cancelable toast
//! notification, built with the Iced GUI framework.
//!
//! The toast lifecycle (enter, rest, exit) lives in [`ui::notifications`] and
//! does not depend on the rest of the application: it runs against any
//! [`ui::notifications::TimerFacility`], including a virtual clock for tests.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod error;
pub mod ui;
