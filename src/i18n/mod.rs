// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! Translations are Fluent `.ftl` files embedded at compile time. The locale is
//! picked from the CLI, then the config file, then the operating system, with
//! `en-US` as the fallback.

pub mod fluent;
