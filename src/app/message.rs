// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::home;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::state::{ActivityKind, TimerId};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Navbar(navbar::Message),
    Modal(modal::Message),
    /// Qualifying user input observed anywhere in the window.
    Activity(ActivityKind),
    /// Escape was pressed; counts as activity and dismisses modals.
    EscapePressed,
    /// The pending idle timer fired.
    IdleTimerElapsed(TimerId),
    /// Periodic refresh of the wall clock.
    ClockTick,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `KIOSK_DASH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional idle timeout override in milliseconds.
    pub screensaver_timeout_ms: Option<u64>,
}
