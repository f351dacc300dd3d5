// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard views and
//! the idle screensaver.
//!
//! The `App` struct owns the view-state store, localization, and the
//! screensaver driver. Views receive read-only references to the store and
//! report user intent back as messages; `update` is the only place where the
//! store is mutated.

mod message;
pub mod paths;
pub mod screensaver;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::state::{ScreensaverTimeout, ViewState};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use screensaver::Screensaver;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    view_state: ViewState,
    screensaver: Screensaver,
    theme_mode: ThemeMode,
    /// `HH:MM` label shared by the navbar and the screensaver.
    clock: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view_state", &self.view_state)
            .field("idle", &self.screensaver.is_idle())
            .field("clock", &self.clock)
            .finish()
    }
}

/// Builds the window settings. Kiosk mode drops decorations and resizing.
pub fn window_settings(config: &Config) -> window::Settings {
    let icon = crate::icon::load_window_icon();
    let kiosk = config.window.kiosk_mode.unwrap_or(false);

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        decorations: !kiosk,
        resizable: !kiosk,
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced 0.14 requires a `Fn` boot; the startup state is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, &config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .exit_on_close_request(false)
        .run()
}

/// Resolves the idle settings: CLI override, then config, then defaults.
fn screensaver_settings(flags: &Flags, config: &Config) -> (bool, ScreensaverTimeout) {
    let enabled = config
        .screensaver
        .enabled
        .unwrap_or(config::DEFAULT_SCREENSAVER_ENABLED);
    let millis = flags
        .screensaver_timeout_ms
        .or(config.screensaver.timeout_ms)
        .unwrap_or(config::DEFAULT_SCREENSAVER_TIMEOUT_MS);
    (enabled, ScreensaverTimeout::new(millis))
}

impl App {
    /// Initializes application state and arms the idle timer.
    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let (enabled, timeout) = screensaver_settings(&flags, config);
        tracing::info!(
            locale = %i18n.current_locale(),
            screensaver = enabled,
            timeout_ms = timeout.millis(),
            "dashboard starting"
        );

        let mut app = App {
            i18n,
            view_state: ViewState::new(),
            screensaver: Screensaver::new(enabled, timeout),
            theme_mode: config.general.theme_mode,
            clock: navbar::clock_label(chrono::Local::now().time()),
        };

        let task = app.screensaver.start(Instant::now());
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let clock_sub = subscription::create_clock_subscription();

        Subscription::batch([event_sub, clock_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            view_state: &mut self.view_state,
            screensaver: &mut self.screensaver,
            clock: &mut self.clock,
        };

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Activity(kind) => update::handle_activity(&mut ctx, kind, Instant::now()),
            Message::EscapePressed => update::handle_escape(&mut ctx, Instant::now()),
            Message::IdleTimerElapsed(id) => update::handle_idle_timer(&mut ctx, id),
            Message::ClockTick => update::handle_clock_tick(&mut ctx),
            Message::WindowCloseRequested(id) => update::handle_close_request(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            view_state: &self.view_state,
            clock: &self.clock,
            idle: self.screensaver.is_idle(),
        })
    }
}
