// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the dashboard's SVG artwork.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`, so each file is parsed once per process.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the artwork, not the feature it
//! controls (e.g., `car` not `drive_toggle`).

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

// =============================================================================
// Home Tiles
// =============================================================================

define_icon!(message, "assets/icons/message.svg", "Speech bubble.");
define_icon!(
    emergency,
    "assets/icons/emergency.svg",
    "Warning triangle with exclamation mark."
);

// =============================================================================
// Dock
// =============================================================================

define_icon!(alert, "assets/icons/alert.svg", "Bell.");
define_icon!(camera, "assets/icons/camera.svg", "Camera body with lens.");
define_icon!(car, "assets/icons/car.svg", "Car seen from the front.");
define_icon!(microphone, "assets/icons/microphone.svg", "Microphone capsule.");

// =============================================================================
// Status Bar
// =============================================================================

define_icon!(
    notification,
    "assets/icons/notification.svg",
    "Bell with badge dot."
);
define_icon!(heart, "assets/icons/heart.svg", "Heart outline.");
define_icon!(
    battery_charge,
    "assets/icons/battery_charge.svg",
    "Battery with charging bolt."
);
define_icon!(setting, "assets/icons/setting.svg", "Gear.");

// =============================================================================
// Artwork
// =============================================================================

define_icon!(
    screensaver,
    "assets/branding/screensaver.svg",
    "Full-screen night landscape shown while idle."
);
