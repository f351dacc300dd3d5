// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages become store actions; input and timer messages are fed
//! to the screensaver driver.

use super::screensaver::Screensaver;
use super::Message;
use crate::ui::home;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::state::{ActivityKind, TimerId, ViewState};
use iced::{window, Task};
use std::time::Instant;

/// Mutable slices of `App` the handlers operate on.
pub struct UpdateContext<'a> {
    pub view_state: &'a mut ViewState,
    pub screensaver: &'a mut Screensaver,
    pub clock: &'a mut String,
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    home::update(message, ctx.view_state);
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    navbar::update(message, ctx.view_state);
    Task::none()
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    modal::update(message, ctx.view_state);
    Task::none()
}

pub fn handle_activity(
    ctx: &mut UpdateContext<'_>,
    kind: ActivityKind,
    now: Instant,
) -> Task<Message> {
    ctx.screensaver.activity(kind, now)
}

/// Escape is activity first; it only closes modals the user can see.
pub fn handle_escape(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let was_idle = ctx.screensaver.is_idle();
    let task = ctx.screensaver.activity(ActivityKind::KeyPressed, now);

    if !was_idle && ctx.view_state.any_modal_open() {
        modal::update(modal::Message::CloseAll, ctx.view_state);
    }
    task
}

pub fn handle_idle_timer(ctx: &mut UpdateContext<'_>, id: TimerId) -> Task<Message> {
    if ctx.screensaver.timer_elapsed(id) {
        refresh_clock(ctx);
    }
    Task::none()
}

pub fn handle_clock_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    refresh_clock(ctx);
    Task::none()
}

/// Tears down the idle timer before the window goes away.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.screensaver.shutdown();
    tracing::info!("window close requested");
    window::close(id)
}

fn refresh_clock(ctx: &mut UpdateContext<'_>) {
    let label = navbar::clock_label(chrono::Local::now().time());
    if *ctx.clock != label {
        *ctx.clock = label;
    }
}
