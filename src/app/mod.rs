// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront and the toast.
//!
//! The `App` struct wires together the storefront screen, localization,
//! settings and the single toast lifecycle. Storefront intents become toast
//! requests here; timer tasks scheduled by the lifecycle are handed back to
//! the Iced runtime after every update.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, StartupToast};

use crate::ui::notifications::{
    CycleId, Kind, Lifecycle, NotificationMessage, NotificationRequest, TaskTimers,
};
use crate::ui::storefront::{Product, CATALOG};
use crate::ui::theming::{Appearance, ThemeMode};
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Toast lifecycle driven by Iced tasks.
pub(crate) type ToastLifecycle = Lifecycle<TaskTimers<NotificationMessage>>;

/// Root Iced application state that bridges the storefront, localization,
/// persisted preferences and the toast.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory override for `settings.toml`, `None` for the default location.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    appearance: Appearance,
    products: Vec<Product>,
    cart_count: usize,
    toast: ToastLifecycle,
    /// Cycle of the most recently closed toast.
    last_closed: Option<CycleId>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cart_count", &self.cart_count)
            .field("toast_phase", &self.toast.phase())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Flags are consumed once while iced 0.14 asks for an `Fn` boot closure.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(I18n::default(), Config::default(), None)
    }
}

impl App {
    fn with_config(i18n: I18n, config: Config, config_dir: Option<PathBuf>) -> Self {
        let theme_mode = config.general.theme_mode;
        let appearance = Appearance::resolve(theme_mode);
        let toast = Lifecycle::with_motion(
            TaskTimers::new(NotificationMessage::TimerFired),
            config.notifications.motion(),
        );

        Self {
            i18n,
            config,
            config_dir,
            theme_mode,
            appearance,
            products: CATALOG.to_vec(),
            cart_count: 0,
            toast,
            last_closed: None,
        }
    }

    /// Initializes application state and shows the launch toast, if any:
    /// a config warning wins over a toast requested from the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_config(i18n, config, config_dir);
        tracing::info!(
            theme = ?app.theme_mode,
            locale = %app.i18n.current_locale(),
            "application started"
        );

        let now = Instant::now();
        if let Some(key) = config_warning {
            let request = NotificationRequest::error(
                app.i18n.tr("toast-settings-title"),
                app.i18n.tr(&key),
            );
            update::show_toast(&mut app.update_context(), request, now);
        } else if let Some(startup) = flags.startup_toast {
            let request = app.startup_request(startup);
            update::show_request(&mut app.update_context(), request, now);
        }

        let task = app.take_timer_tasks();
        (app, task)
    }

    /// Builds the launch toast, filling missing fields from the settings.
    fn startup_request(&self, startup: StartupToast) -> NotificationRequest {
        let kind = startup.kind.as_deref().map(Kind::parse).unwrap_or_default();
        let duration = startup.duration_ms.map_or_else(
            || self.config.notifications.duration(),
            |ms| {
                Duration::from_millis(ms.clamp(
                    config::MIN_NOTIFICATION_DURATION_MS,
                    config::MAX_NOTIFICATION_DURATION_MS,
                ))
            },
        );
        NotificationRequest::new(
            kind,
            startup.title.unwrap_or_default(),
            startup.message.unwrap_or_default(),
        )
        .with_duration(duration)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            config_dir: &self.config_dir,
            products: &self.products,
            cart_count: &mut self.cart_count,
            toast: &mut self.toast,
            last_closed: &mut self.last_closed,
        }
    }

    /// Drains the dismiss timers scheduled since the last call.
    fn take_timer_tasks(&mut self) -> Task<Message> {
        self.toast
            .timers_mut()
            .take_tasks()
            .map(Message::Notification)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.appearance.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toast.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Storefront(storefront_message) => {
                update::handle_storefront_message(&mut ctx, storefront_message, Instant::now());
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(
                    &mut ctx,
                    &notification_message,
                    Instant::now(),
                );
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }

        self.take_timer_tasks()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.appearance.colors,
            products: &self.products,
            cart_count: self.cart_count,
            toast: &self.toast,
        })
    }
}
