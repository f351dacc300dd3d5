// SPDX-License-Identifier: MPL-2.0
//! Runtime driver for the idle monitor.
//!
//! [`IdleMonitor`] decides *when* the dashboard goes idle; this driver turns
//! its timer requests into a single abortable `tokio` sleep task. Rescheduling
//! aborts the previous task before the new one is spawned, and stale
//! completions are still rejected by the monitor's timer id check.

use super::Message;
use crate::ui::state::{ActivityKind, IdleMonitor, ScreensaverTimeout, TimerId, TimerRequest};
use iced::task;
use iced::Task;
use std::time::Instant;

pub struct Screensaver {
    monitor: IdleMonitor,
    enabled: bool,
    timer: Option<task::Handle>,
}

impl Screensaver {
    pub fn new(enabled: bool, timeout: ScreensaverTimeout) -> Self {
        Self {
            monitor: IdleMonitor::new(timeout),
            enabled,
            timer: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.monitor.is_idle()
    }

    #[must_use]
    pub fn monitor(&self) -> &IdleMonitor {
        &self.monitor
    }

    /// Arms the first idle window. A disabled screensaver stays active forever.
    pub fn start(&mut self, now: Instant) -> Task<Message> {
        if !self.enabled {
            tracing::info!("screensaver disabled");
            return Task::none();
        }
        let request = self.monitor.start(now);
        self.schedule(request)
    }

    /// Wakes the screensaver if needed and restarts the idle window.
    pub fn activity(&mut self, kind: ActivityKind, now: Instant) -> Task<Message> {
        match self.monitor.record_activity(kind, now) {
            Some(request) => self.schedule(request),
            None => Task::none(),
        }
    }

    /// Handles a finished sleep. Returns `true` when the dashboard went idle.
    pub fn timer_elapsed(&mut self, id: TimerId) -> bool {
        let fired = self.monitor.timer_elapsed(id);
        if fired {
            self.timer = None;
        }
        fired
    }

    /// Cancels the pending timer and stops observing activity.
    pub fn shutdown(&mut self) {
        self.cancel_timer();
        if let Some(id) = self.monitor.stop() {
            tracing::debug!(?id, "idle timer cancelled on shutdown");
        }
    }

    fn schedule(&mut self, request: TimerRequest) -> Task<Message> {
        self.cancel_timer();

        let TimerRequest { id, delay } = request;
        let (task, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |()| Message::IdleTimerElapsed(id),
        )
        .abortable();

        self.timer = Some(handle);
        task
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn timeout() -> ScreensaverTimeout {
        ScreensaverTimeout::new(5_000)
    }

    #[test]
    fn disabled_screensaver_never_arms() {
        let mut screensaver = Screensaver::new(false, timeout());
        let _ = screensaver.start(Instant::now());

        assert!(!screensaver.monitor().is_running());
        assert!(screensaver.monitor().pending_timer().is_none());
        assert!(!screensaver.is_idle());
    }

    #[test]
    fn activity_replaces_pending_timer() {
        let start = Instant::now();
        let mut screensaver = Screensaver::new(true, timeout());
        let _ = screensaver.start(start);
        let first = screensaver.monitor().pending_timer().expect("armed");

        let _ = screensaver.activity(ActivityKind::PointerMoved, start + Duration::from_secs(4));
        let second = screensaver.monitor().pending_timer().expect("re-armed");

        assert_ne!(first, second);
        assert!(!screensaver.timer_elapsed(first));
        assert!(!screensaver.is_idle());
        assert!(screensaver.timer_elapsed(second));
        assert!(screensaver.is_idle());
    }

    #[test]
    fn activity_while_idle_wakes() {
        let start = Instant::now();
        let mut screensaver = Screensaver::new(true, timeout());
        let _ = screensaver.start(start);
        let id = screensaver.monitor().pending_timer().expect("armed");
        assert!(screensaver.timer_elapsed(id));

        let _ = screensaver.activity(ActivityKind::KeyPressed, start + Duration::from_secs(6));

        assert!(!screensaver.is_idle());
        assert!(screensaver.monitor().pending_timer().is_some());
    }

    #[test]
    fn shutdown_stops_monitor() {
        let mut screensaver = Screensaver::new(true, timeout());
        let _ = screensaver.start(Instant::now());
        let id = screensaver.monitor().pending_timer().expect("armed");

        screensaver.shutdown();

        assert!(!screensaver.monitor().is_running());
        assert!(!screensaver.timer_elapsed(id));
        assert!(!screensaver.is_idle());
    }
}
