// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are turned into activity messages for the idle monitor
//! whether or not a widget captured them: a click on a button is still user
//! activity. Window close requests are routed for teardown.

use super::Message;
use crate::config::defaults::CLOCK_REFRESH_SECS;
use crate::ui::state::ActivityKind;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Creates the window-wide input subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// Creates the once-per-second clock refresh.
pub fn create_clock_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(CLOCK_REFRESH_SECS)).map(|_| Message::ClockTick)
}

fn route_event(event: Event, _status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        event => activity_kind(&event).map(Message::Activity),
    }
}

/// Maps an input event to the activity it represents, if any.
pub fn activity_kind(event: &Event) -> Option<ActivityKind> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { .. }) => Some(ActivityKind::PointerMoved),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(ActivityKind::PointerPressed),
        Event::Touch(touch::Event::FingerMoved { .. }) => Some(ActivityKind::PointerMoved),
        Event::Touch(touch::Event::FingerPressed { .. }) => Some(ActivityKind::PointerPressed),
        Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(ActivityKind::KeyPressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn pointer_and_buttons_count_as_activity() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(10.0, 20.0),
        });
        let pressed = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert_eq!(activity_kind(&moved), Some(ActivityKind::PointerMoved));
        assert_eq!(activity_kind(&pressed), Some(ActivityKind::PointerPressed));
    }

    #[test]
    fn finger_taps_and_drags_count_as_activity() {
        let finger = touch::Finger(0);
        let tap = Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(120.0, 300.0),
        });
        let drag = Event::Touch(touch::Event::FingerMoved {
            id: finger,
            position: Point::new(140.0, 310.0),
        });
        let lift = Event::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(140.0, 310.0),
        });

        assert_eq!(activity_kind(&tap), Some(ActivityKind::PointerPressed));
        assert_eq!(activity_kind(&drag), Some(ActivityKind::PointerMoved));
        assert_eq!(activity_kind(&lift), None);
    }

    #[test]
    fn finger_tap_is_routed_as_activity() {
        let tap = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(10.0, 10.0),
        });

        let routed = route_event(tap, event::Status::Captured, window::Id::unique());

        assert!(matches!(
            routed,
            Some(Message::Activity(ActivityKind::PointerPressed))
        ));
    }

    #[test]
    fn releases_and_window_events_are_ignored() {
        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let left = Event::Mouse(mouse::Event::CursorLeft);
        let focused = Event::Window(window::Event::Focused);

        assert_eq!(activity_kind(&released), None);
        assert_eq!(activity_kind(&left), None);
        assert_eq!(activity_kind(&focused), None);
    }
}
