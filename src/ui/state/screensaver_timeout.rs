// SPDX-License-Identifier: MPL-2.0
//! Screensaver timeout domain type.
//!
//! This module provides a type-safe wrapper for the inactivity window, in
//! milliseconds, after which the idle monitor shows the screensaver.

use crate::config::{
    DEFAULT_SCREENSAVER_TIMEOUT_MS, MAX_SCREENSAVER_TIMEOUT_MS, MIN_SCREENSAVER_TIMEOUT_MS,
};
use std::time::Duration;

/// Inactivity window before the screensaver appears.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1 s – 1 h).
///
/// # Example
///
/// ```
/// use kiosk_dash::ui::state::ScreensaverTimeout;
///
/// let timeout = ScreensaverTimeout::new(5_000);
/// assert_eq!(timeout.millis(), 5_000);
///
/// // Values outside range are clamped
/// let too_low = ScreensaverTimeout::new(10);
/// assert_eq!(too_low.millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreensaverTimeout(u64);

impl ScreensaverTimeout {
    /// Creates a new timeout value, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SCREENSAVER_TIMEOUT_MS, MAX_SCREENSAVER_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ScreensaverTimeout {
    fn default() -> Self {
        Self(DEFAULT_SCREENSAVER_TIMEOUT_MS)
    }
}
