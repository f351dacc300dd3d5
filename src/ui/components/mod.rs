// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the dashboard views.
//!
//! # Components
//!
//! - [`icon`] - Stateless icon buttons: home tiles and dock toggles
//!   ([`Icon`](icon::Icon)) and status bar entries ([`StatusIcon`](icon::StatusIcon))

pub mod icon;

pub use icon::{Icon, IconAppearance, StatusAppearance, StatusIcon};
