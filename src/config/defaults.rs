// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Screensaver**: Idle window before the screensaver overlay appears
//! - **Window**: Initial window geometry
//! - **Clock**: Navbar clock refresh cadence

// ==========================================================================
// Screensaver Defaults
// ==========================================================================

/// Default inactivity window before the screensaver is shown (in milliseconds).
pub const DEFAULT_SCREENSAVER_TIMEOUT_MS: u64 = 5_000;

/// Minimum screensaver timeout (in milliseconds).
pub const MIN_SCREENSAVER_TIMEOUT_MS: u64 = 1_000;

/// Maximum screensaver timeout (in milliseconds), one hour.
pub const MAX_SCREENSAVER_TIMEOUT_MS: u64 = 3_600_000;

/// Whether the screensaver is armed when no config says otherwise.
pub const DEFAULT_SCREENSAVER_ENABLED: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels (typical 7" automotive panel).
pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Smallest window that still fits the dock and status bar.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Smallest window height that still fits the dock and status bar.
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Clock Defaults
// ==========================================================================

/// Refresh interval of the navbar clock (in seconds).
pub const CLOCK_REFRESH_SECS: u64 = 1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCREENSAVER_TIMEOUT_MS > 0);
    assert!(MAX_SCREENSAVER_TIMEOUT_MS >= MIN_SCREENSAVER_TIMEOUT_MS);
    assert!(DEFAULT_SCREENSAVER_TIMEOUT_MS >= MIN_SCREENSAVER_TIMEOUT_MS);
    assert!(DEFAULT_SCREENSAVER_TIMEOUT_MS <= MAX_SCREENSAVER_TIMEOUT_MS);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    assert!(CLOCK_REFRESH_SECS > 0);
};
