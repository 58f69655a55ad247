// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The swipe gate needs raw window mouse events: a drag must keep tracking
//! the cursor after it leaves the knob, and the release must be observed
//! wherever it happens. Both subscriptions are conditional so the app sleeps
//! once the reader is showing articles.

use super::Message;
use crate::ui::{reader, swipe_gate};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Knob settle animation frame interval.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Spinner frame interval while the fetch is pending.
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Routes raw mouse events into the swipe gate while it is on screen.
pub fn create_event_subscription(gate_on_screen: bool) -> Subscription<Message> {
    if !gate_on_screen {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        // Capture status is deliberately ignored: a release over some other
        // widget still ends the drag.
        match event {
            event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::Reader(reader::Message::Gate(
                    swipe_gate::Message::PointerMoved(position),
                )))
            }
            event::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                Some(Message::Reader(reader::Message::Gate(
                    swipe_gate::Message::Released,
                )))
            }
            _ => None,
        }
    })
}

/// Periodic ticks for the knob settle animation and the pending spinner.
/// Inactive when nothing is animating.
pub fn create_tick_subscription(
    knob_animating: bool,
    fetch_pending: bool,
) -> Subscription<Message> {
    let mut ticks = Vec::new();

    if knob_animating {
        ticks.push(time::every(ANIMATION_TICK).map(|_| {
            Message::Reader(reader::Message::Gate(swipe_gate::Message::AnimationTick))
        }));
    }

    if fetch_pending {
        ticks.push(
            time::every(SPINNER_TICK).map(|_| Message::Reader(reader::Message::SpinnerTick)),
        );
    }

    Subscription::batch(ticks)
}
