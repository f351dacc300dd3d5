// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`home`] - Tile box and feature dock
//! - [`navbar`] - Clock and status icons along the top edge
//! - [`modal`] - Stacked modal cards over a dimmed backdrop
//! - [`screensaver`] - Opaque idle layer
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (view flags, idle monitor)
//! - [`components`] - Reusable UI components (icon buttons)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading (visual primitives)

pub mod components;
pub mod design_tokens;
pub mod home;
pub mod icons;
pub mod modal;
pub mod navbar;
pub mod screensaver;
pub mod state;
pub mod styles;
pub mod theming;
