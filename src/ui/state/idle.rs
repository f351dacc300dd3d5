// SPDX-License-Identifier: MPL-2.0
//! Idle detection for the screensaver.
//!
//! [`IdleMonitor`] is a two-phase state machine (`Active` → `Idle` after a
//! quiet window, back to `Active` on any input). It never reads the clock
//! itself: callers pass the current `Instant`, and the monitor answers with
//! a [`TimerRequest`] describing the single delayed callback the runtime
//! should schedule. Every request carries a fresh [`TimerId`]; elapsed
//! notifications for any other id are stale and ignored, so the most recent
//! schedule always wins.

use super::ScreensaverTimeout;
use std::time::{Duration, Instant};

/// Whether the screensaver overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdlePhase {
    /// Normal UI visible.
    #[default]
    Active,
    /// Screensaver overlay covers the UI.
    Idle,
}

/// Input that counts as user activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    PointerMoved,
    KeyPressed,
    PointerPressed,
}

/// Identifies one armed timeout window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Instruction to schedule the idle callback `delay` from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub id: TimerId,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    id: TimerId,
    deadline: Instant,
}

/// Debounced inactivity tracker. At most one timer is pending at any time.
#[derive(Debug, Clone)]
pub struct IdleMonitor {
    timeout: ScreensaverTimeout,
    phase: IdlePhase,
    pending: Option<PendingTimer>,
    running: bool,
    next_id: u64,
}

impl IdleMonitor {
    #[must_use]
    pub fn new(timeout: ScreensaverTimeout) -> Self {
        Self {
            timeout,
            phase: IdlePhase::Active,
            pending: None,
            running: false,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> ScreensaverTimeout {
        self.timeout
    }

    #[must_use]
    pub fn phase(&self) -> IdlePhase {
        self.phase
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == IdlePhase::Idle
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// When the pending timer expires, if one is armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.deadline)
    }

    /// Id of the pending timer, if one is armed.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.map(|pending| pending.id)
    }

    /// Starts monitoring (mount). The state is `Active` and a full window is armed.
    pub fn start(&mut self, now: Instant) -> TimerRequest {
        self.running = true;
        self.phase = IdlePhase::Active;
        tracing::debug!(timeout_ms = self.timeout.millis(), "idle monitor started");
        self.rearm(now)
    }

    /// Handles a qualifying input event.
    ///
    /// Leaves `Idle` immediately, cancels the pending timer and arms a new
    /// full window. Returns `None` when the monitor is not running.
    pub fn record_activity(&mut self, kind: ActivityKind, now: Instant) -> Option<TimerRequest> {
        if !self.running {
            return None;
        }
        if self.phase == IdlePhase::Idle {
            self.phase = IdlePhase::Active;
            tracing::info!(?kind, "screensaver dismissed");
        }
        Some(self.rearm(now))
    }

    /// Handles the runtime callback for timer `id`.
    ///
    /// Returns `true` when this moved the monitor to `Idle`. Callbacks for
    /// cancelled or replaced timers return `false` and change nothing.
    pub fn timer_elapsed(&mut self, id: TimerId) -> bool {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                self.enter_idle();
                true
            }
            _ => {
                tracing::trace!(?id, "ignoring stale idle timer");
                false
            }
        }
    }

    /// Fires the pending timer if its deadline has passed at `now`.
    ///
    /// Equivalent to the runtime delivering the callback on time; used where
    /// the caller drives the clock itself.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => self.timer_elapsed(pending.id),
            _ => false,
        }
    }

    /// Stops monitoring (teardown), returning the timer that was cancelled.
    ///
    /// After this no callback can change the phase, and activity is ignored
    /// until [`start`](Self::start) is called again.
    pub fn stop(&mut self) -> Option<TimerId> {
        self.running = false;
        self.phase = IdlePhase::Active;
        let cancelled = self.pending.take().map(|pending| pending.id);
        tracing::debug!(?cancelled, "idle monitor stopped");
        cancelled
    }

    /// Changes the window length. Takes effect from the next re-arm.
    pub fn set_timeout(&mut self, timeout: ScreensaverTimeout) {
        self.timeout = timeout;
    }

    fn rearm(&mut self, now: Instant) -> TimerRequest {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let delay = self.timeout.as_duration();
        self.pending = Some(PendingTimer {
            id,
            deadline: now + delay,
        });
        TimerRequest { id, delay }
    }

    fn enter_idle(&mut self) {
        if self.phase != IdlePhase::Idle {
            self.phase = IdlePhase::Idle;
            tracing::info!(timeout_ms = self.timeout.millis(), "screensaver activated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn monitor() -> IdleMonitor {
        IdleMonitor::new(ScreensaverTimeout::new(5_000))
    }

    #[test]
    fn new_monitor_is_active_and_unarmed() {
        let monitor = monitor();
        assert_eq!(monitor.phase(), IdlePhase::Active);
        assert!(!monitor.is_running());
        assert!(monitor.deadline().is_none());
    }

    #[test]
    fn goes_idle_exactly_at_timeout() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        let request = monitor.start(t0);
        assert_eq!(request.delay, ms(5_000));

        assert!(!monitor.poll(t0 + ms(4_999)));
        assert_eq!(monitor.phase(), IdlePhase::Active);

        assert!(monitor.poll(t0 + ms(5_000)));
        assert_eq!(monitor.phase(), IdlePhase::Idle);
    }

    #[test]
    fn activity_restarts_the_window() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        monitor.start(t0);

        monitor.record_activity(ActivityKind::PointerMoved, t0 + ms(4_000));

        assert!(!monitor.poll(t0 + ms(8_999)));
        assert_eq!(monitor.phase(), IdlePhase::Active);
        assert!(monitor.poll(t0 + ms(9_000)));
        assert_eq!(monitor.phase(), IdlePhase::Idle);
    }

    #[test]
    fn activity_while_idle_returns_to_active() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        monitor.start(t0);
        monitor.poll(t0 + ms(5_000));
        assert!(monitor.is_idle());

        let request = monitor
            .record_activity(ActivityKind::KeyPressed, t0 + ms(6_000))
            .expect("running monitor re-arms");

        assert_eq!(monitor.phase(), IdlePhase::Active);
        assert_eq!(monitor.pending_timer(), Some(request.id));
        assert_eq!(monitor.deadline(), Some(t0 + ms(11_000)));
    }

    #[test]
    fn each_rearm_replaces_the_pending_timer() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        let first = monitor.start(t0);
        let second = monitor
            .record_activity(ActivityKind::PointerPressed, t0 + ms(100))
            .expect("running monitor re-arms");

        assert_ne!(first.id, second.id);
        assert_eq!(monitor.pending_timer(), Some(second.id));
    }

    #[test]
    fn stale_timer_callback_is_ignored() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        let first = monitor.start(t0);
        let second = monitor
            .record_activity(ActivityKind::PointerMoved, t0 + ms(1_000))
            .expect("running monitor re-arms");

        assert!(!monitor.timer_elapsed(first.id));
        assert_eq!(monitor.phase(), IdlePhase::Active);

        assert!(monitor.timer_elapsed(second.id));
        assert_eq!(monitor.phase(), IdlePhase::Idle);
    }

    #[test]
    fn elapsed_timer_is_consumed() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        let request = monitor.start(t0);

        assert!(monitor.timer_elapsed(request.id));
        assert!(monitor.pending_timer().is_none());
        assert!(!monitor.timer_elapsed(request.id));
    }

    #[test]
    fn stop_cancels_and_blocks_late_callbacks() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        let request = monitor.start(t0);

        assert_eq!(monitor.stop(), Some(request.id));
        assert!(!monitor.timer_elapsed(request.id));
        assert!(!monitor.poll(t0 + ms(60_000)));
        assert_eq!(monitor.phase(), IdlePhase::Active);
        assert!(monitor
            .record_activity(ActivityKind::KeyPressed, t0 + ms(1))
            .is_none());
    }

    #[test]
    fn set_timeout_applies_on_next_rearm() {
        let t0 = Instant::now();
        let mut monitor = monitor();
        monitor.start(t0);
        monitor.set_timeout(ScreensaverTimeout::new(2_000));

        assert_eq!(monitor.deadline(), Some(t0 + ms(5_000)));
        let request = monitor
            .record_activity(ActivityKind::PointerMoved, t0 + ms(10))
            .expect("running monitor re-arms");
        assert_eq!(request.delay, ms(2_000));
        assert_eq!(monitor.deadline(), Some(t0 + ms(2_010)));
    }
}
