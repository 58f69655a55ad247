// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the reader screen.
//!
//! The `App` struct owns the reader component and translates its effects
//! into side effects: the one-shot feed request and per-article image
//! requests, both run as async tasks on the Iced runtime.

mod message;
mod subscription;

pub use message::Message;

use crate::feed::client;
use crate::ui::reader;
use crate::ui::theme::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    reader: reader::State,
    theme_mode: ThemeMode,
}

/// Builds the window settings: a phone-shaped single window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reader(reader_msg) => {
                let effect = self.reader.handle(reader_msg);
                self.perform_effect(effect)
            }
        }
    }

    /// Turns a reader effect into the async task that fulfils it.
    fn perform_effect(&mut self, effect: reader::Effect) -> Task<Message> {
        match effect {
            reader::Effect::None => Task::none(),
            reader::Effect::StartFetch => Task::perform(client::fetch_latest(), |result| {
                Message::Reader(reader::Message::FetchCompleted(result))
            }),
            reader::Effect::LoadImage { index, url } => {
                Task::perform(client::fetch_image(url), move |result| {
                    Message::Reader(reader::Message::ImageLoaded { index, result })
                })
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        reader::view(&self.reader).map(Message::Reader)
    }

    fn title(&self) -> String {
        String::from("Newsreel")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.reader.shows_gate()),
            subscription::create_tick_subscription(
                self.reader.gate().is_animating(),
                self.reader.is_fetch_pending(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_shows_the_swipe_gate() {
        let (app, _task) = App::new();
        assert!(app.reader.shows_gate());
        assert!(!app.reader.is_fetch_pending());
    }

    #[test]
    fn window_is_phone_shaped_with_a_minimum_size() {
        let settings = window_settings();
        assert!(settings.size.height > settings.size.width);
        assert!(settings.min_size.is_some());
    }
}
