// SPDX-License-Identifier: MPL-2.0
//! Reader screen component: fetch lifecycle, article navigation, and the
//! embedded swipe gate.
//!
//! The component is a plain state machine; network work is expressed as
//! `Effect`s that the application root turns into async tasks. This keeps
//! every transition unit-testable without a runtime.

mod view;

pub use view::view;

use crate::error::Result;
use crate::feed::{Article, ArticleNavigator, FetchState};
use crate::ui::swipe_gate;
use iced::widget::image;
use std::collections::HashMap;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Loading status of one article's image.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Bytes requested, not yet arrived.
    Loading,
    /// Decodable bytes arrived.
    Ready(image::Handle),
    /// The request failed; the card renders the neutral placeholder.
    Failed,
}

/// Reader component state.
#[derive(Debug, Default)]
pub struct State {
    /// One-shot fetch lifecycle; only ever advances forward.
    fetch: FetchState,
    /// The swipe gate shown until the fetch resolves.
    gate: swipe_gate::State,
    /// Image slots keyed by article index. Each slot is requested at most
    /// once for the lifetime of the screen.
    images: HashMap<usize, ImageSlot>,
    /// Spinner angle while the fetch is pending.
    spinner_rotation: f32,
}

/// Messages for the reader component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded swipe gate message.
    Gate(swipe_gate::Message),
    /// The feed request finished.
    FetchCompleted(Result<Vec<Article>>),
    /// Advance to the next article (clamped).
    NextArticle,
    /// Step back to the previous article (clamped).
    PreviousArticle,
    /// An image request finished.
    ImageLoaded { index: usize, result: Result<Vec<u8>> },
    /// Spinner animation tick while the fetch is pending.
    SpinnerTick,
}

/// Effects the application root must perform.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Issue the one-shot feed request.
    StartFetch,
    /// Fetch image bytes for the article at `index`.
    LoadImage { index: usize, url: String },
}

impl State {
    /// Handle a reader message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Gate(gate_msg) => {
                let effect = self.gate.handle(gate_msg);
                match effect {
                    swipe_gate::Effect::Committed => self.on_swipe_committed(),
                    swipe_gate::Effect::None => Effect::None,
                }
            }
            Message::FetchCompleted(result) => {
                // Forward-only: a completion landing in any state other
                // than Pending is stale and ignored.
                if !self.fetch.is_pending() {
                    return Effect::None;
                }
                match result {
                    Ok(articles) => {
                        let navigator = ArticleNavigator::new(articles);
                        self.fetch = FetchState::Resolved(Ok(navigator));
                        self.request_current_image()
                    }
                    Err(err) => {
                        eprintln!("Feed fetch failed: {}", err);
                        self.fetch = FetchState::Resolved(Err(err));
                        Effect::None
                    }
                }
            }
            Message::NextArticle => {
                if let FetchState::Resolved(Ok(navigator)) = &mut self.fetch {
                    if navigator.next() {
                        return self.request_current_image();
                    }
                }
                Effect::None
            }
            Message::PreviousArticle => {
                if let FetchState::Resolved(Ok(navigator)) = &mut self.fetch {
                    if navigator.previous() {
                        return self.request_current_image();
                    }
                }
                Effect::None
            }
            Message::ImageLoaded { index, result } => {
                let slot = match result {
                    Ok(bytes) => ImageSlot::Ready(image::Handle::from_bytes(bytes)),
                    Err(err) => {
                        eprintln!("Image load error: {}", err);
                        ImageSlot::Failed
                    }
                };
                self.images.insert(index, slot);
                Effect::None
            }
            Message::SpinnerTick => {
                if self.fetch.is_pending() {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// A committed swipe activates the fetch exactly once. Commits observed
    /// in any later state change nothing, which is what makes repeated
    /// swipes on the (still visible) gate harmless.
    fn on_swipe_committed(&mut self) -> Effect {
        match self.fetch {
            FetchState::NotRequested => {
                self.fetch = FetchState::Pending;
                Effect::StartFetch
            }
            _ => Effect::None,
        }
    }

    /// Requests the current article's image unless its slot already exists.
    fn request_current_image(&mut self) -> Effect {
        let FetchState::Resolved(Ok(navigator)) = &self.fetch else {
            return Effect::None;
        };
        let Some(article) = navigator.current() else {
            return Effect::None;
        };
        let index = navigator.current_index();
        if self.images.contains_key(&index) {
            return Effect::None;
        }
        let url = article.image_url().to_string();
        self.images.insert(index, ImageSlot::Loading);
        Effect::LoadImage { index, url }
    }

    /// Current fetch lifecycle state.
    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    /// The embedded swipe gate.
    pub fn gate(&self) -> &swipe_gate::State {
        &self.gate
    }

    /// Whether the swipe gate is the active screen (fetch unresolved).
    pub fn shows_gate(&self) -> bool {
        self.fetch.is_unresolved()
    }

    /// Whether the feed request is in flight (drives the spinner tick).
    pub fn is_fetch_pending(&self) -> bool {
        self.fetch.is_pending()
    }

    /// Image slot for an article index, if one was ever requested.
    pub fn image_slot(&self, index: usize) -> Option<&ImageSlot> {
        self.images.get(&index)
    }

    /// Spinner angle in radians.
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
