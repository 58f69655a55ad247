// SPDX-License-Identifier: MPL-2.0
//! Swipe gate sub-component: the draggable knob that triggers the feed fetch.
//!
//! The gate tracks one horizontal drag at a time. Release past the commit
//! threshold reports `Effect::Committed` (exactly once per release) and the
//! knob settles at its end position; any shorter drag settles back to the
//! origin. The gate itself never fetches anything; the owning reader decides
//! what a commit means.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, mouse, Element, Length, Point};

/// Release displacement beyond which the gesture commits.
pub const COMMIT_THRESHOLD: f32 = 150.0;

/// Offset the knob settles at after a committed release.
pub const COMMITTED_OFFSET: f32 = 200.0;

/// Fraction of the remaining distance covered per animation tick.
const SETTLE_FACTOR: f32 = 0.25;

/// Distance from the target below which the knob snaps and stops animating.
const SETTLE_EPSILON: f32 = 0.5;

/// Gap between the knob and the track edge.
const KNOB_MARGIN: f32 = 5.0;

/// Interaction phase of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No interaction yet.
    #[default]
    Idle,
    /// The knob is grabbed and follows the cursor.
    Dragging,
    /// Last release crossed the threshold.
    Committed,
    /// Last release fell short; the knob returned to the origin.
    Cancelled,
}

/// Swipe gate state: phase, cursor tracking, and knob settle animation.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    /// Last known cursor x in window coordinates. Tracked in every phase so
    /// a grab knows where the drag started.
    cursor_x: f32,
    /// Cursor x at the moment the knob was grabbed.
    grab_x: f32,
    /// Current visual knob offset. Unclamped while dragging; the view clips
    /// it to the track.
    offset: f32,
    /// Settle target while animating.
    target: f32,
    animating: bool,
    /// Set on the first committed release; drives the "Swiped!" caption only.
    swiped: bool,
}

/// Messages for the swipe gate sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The knob was pressed; arms drag tracking at the current cursor x.
    KnobGrabbed,
    /// The cursor moved (routed from raw window events).
    PointerMoved(Point),
    /// The left button was released anywhere in the window.
    Released,
    /// Settle animation tick.
    AnimationTick,
}

/// Effects produced by gate interactions.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A release crossed the threshold. Reported once per such release;
    /// the owner is responsible for treating repeats as no-ops.
    Committed,
}

impl State {
    /// Handle a gate message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::KnobGrabbed => {
                // A grab re-arms the gate from any phase; the previous
                // outcome does not make the control single-use.
                self.phase = Phase::Dragging;
                self.grab_x = self.cursor_x;
                self.offset = 0.0;
                self.animating = false;
                Effect::None
            }
            Message::PointerMoved(position) => {
                self.cursor_x = position.x;
                if self.phase == Phase::Dragging {
                    self.offset = position.x - self.grab_x;
                }
                Effect::None
            }
            Message::Released => {
                if self.phase != Phase::Dragging {
                    return Effect::None;
                }
                if self.offset > COMMIT_THRESHOLD {
                    self.phase = Phase::Committed;
                    self.swiped = true;
                    self.begin_settle(COMMITTED_OFFSET);
                    Effect::Committed
                } else {
                    self.phase = Phase::Cancelled;
                    self.begin_settle(0.0);
                    Effect::None
                }
            }
            Message::AnimationTick => {
                if self.animating {
                    self.offset += (self.target - self.offset) * SETTLE_FACTOR;
                    if (self.target - self.offset).abs() < SETTLE_EPSILON {
                        self.offset = self.target;
                        self.animating = false;
                    }
                }
                Effect::None
            }
        }
    }

    fn begin_settle(&mut self, target: f32) {
        self.target = target;
        self.animating = true;
    }

    /// Current interaction phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the knob is currently grabbed.
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Whether the knob is settling toward a target. Gates the animation
    /// tick subscription.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Raw (unclamped) knob offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a committed release has happened on this gate.
    pub fn swiped(&self) -> bool {
        self.swiped
    }

    /// Knob travel clipped to the track, mirroring the original control's
    /// hidden overflow.
    fn knob_travel(&self) -> f32 {
        let max = sizing::SWIPE_TRACK_WIDTH - sizing::SWIPE_KNOB_SIZE - KNOB_MARGIN * 2.0;
        self.offset.clamp(0.0, max)
    }
}

/// Renders the swipe prompt: instructions, the track with its knob, and the
/// success caption once a commit has happened.
pub fn view(state: &State) -> Element<'_, Message> {
    let instructions = Text::new("No Data Found. Just Swipe Right to Load News.")
        .size(typography::TITLE_SM)
        .color(palette::GRAY_400);

    let knob_glyph = Text::new("\u{2192}").size(typography::TITLE_MD);
    let knob = Container::new(knob_glyph)
        .width(Length::Fixed(sizing::SWIPE_KNOB_SIZE))
        .height(Length::Fixed(sizing::SWIPE_KNOB_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::swipe_knob);

    let cursor_interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };
    let knob = mouse_area(knob)
        .on_press(Message::KnobGrabbed)
        .interaction(cursor_interaction);

    let knob_row = Row::new()
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(
            Space::new()
                .width(Length::Fixed(KNOB_MARGIN + state.knob_travel()))
                .height(Length::Shrink),
        )
        .push(knob);

    let track_label = Container::new(
        Text::new("Swipe to right")
            .size(typography::TITLE_SM)
            .color(palette::WHITE),
    )
    .height(Length::Fill)
    .padding([0.0, spacing::LG])
    .align_y(alignment::Vertical::Center);

    let track = Container::new(Stack::new().push(track_label).push(knob_row))
        .width(Length::Fixed(sizing::SWIPE_TRACK_WIDTH))
        .height(Length::Fixed(sizing::SWIPE_TRACK_HEIGHT))
        .style(styles::container::swipe_track);

    let mut content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(instructions)
        .push(track);

    if state.swiped() {
        content = content.push(
            Text::new("Swiped!")
                .size(typography::TITLE_SM)
                .color(palette::SUCCESS_500),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
