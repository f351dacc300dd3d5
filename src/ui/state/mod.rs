// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the dashboard state logic separated from the main App
//! struct and from the views that read it.

pub mod idle;
pub mod screensaver_timeout;
pub mod view_state;

pub use idle::{ActivityKind, IdleMonitor, IdlePhase, TimerId, TimerRequest};
pub use screensaver_timeout::ScreensaverTimeout;
pub use view_state::{Action, ModalFlags, ModalKind, ToggleFlags, ToggleKind, ViewState};
