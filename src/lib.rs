// SPDX-License-Identifier: MPL-2.0
//! `kiosk_dash` is a touch dashboard for in-vehicle and kiosk panels, built
//! with the Iced GUI framework.
//!
//! It shows a home screen with message tiles and a feature dock, a status bar
//! that opens informational modals, and a screensaver that covers the UI after
//! a period without input.

#![doc(html_root_url = "https://docs.rs/kiosk_dash/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
