// SPDX-License-Identifier: MPL-2.0
//! Reader screen rendering.
//!
//! The render decision is evaluated top-down, first match wins: fetch error,
//! then the swipe gate while the fetch is unresolved, then the empty-feed
//! message, then the article card. The ordering matters: the controls are
//! only built on the non-empty branch, where the navigator invariant makes
//! the boundary checks well-defined.

use super::{ImageSlot, Message, State};
use crate::feed::{Article, ArticleNavigator, FetchState};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::spinner::Spinner;
use crate::ui::styles;
use crate::ui::swipe_gate;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Fixed message for the empty (but successful) feed result.
const NO_ARTICLES_MESSAGE: &str = "No articles available.";

/// Renders the reader screen.
pub fn view(state: &State) -> Element<'_, Message> {
    match state.fetch() {
        FetchState::Resolved(Err(err)) => notice_view(err.user_message()),
        FetchState::NotRequested | FetchState::Pending => gate_view(state),
        FetchState::Resolved(Ok(navigator)) => match navigator.current() {
            None => notice_view(NO_ARTICLES_MESSAGE),
            Some(article) => card_view(state, navigator, article),
        },
    }
}

/// Centered fixed-text screen used for both the fetch error and the empty
/// feed result.
fn notice_view(message: &str) -> Element<'_, Message> {
    let text = Text::new(message.to_string())
        .size(typography::TITLE_SM)
        .color(palette::ERROR_500);

    Container::new(text)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// The swipe prompt, with a loading indicator stacked on top while the
/// request is in flight.
fn gate_view(state: &State) -> Element<'_, Message> {
    let gate = swipe_gate::view(state.gate()).map(Message::Gate);

    if !state.is_fetch_pending() {
        return gate;
    }

    let spinner = Spinner::new(palette::PRIMARY_500, state.spinner_rotation()).into_element();
    let caption = Text::new("Loading latest headlines")
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let loading = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption);

    Stack::new()
        .push(gate)
        .push(
            Container::new(loading)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom),
        )
        .into()
}

/// The article card plus bounded Previous/Next controls.
fn card_view<'a>(
    state: &'a State,
    navigator: &'a ArticleNavigator,
    article: &'a Article,
) -> Element<'a, Message> {
    let index = navigator.current_index();

    let image_block: Element<'a, Message> = match state.image_slot(index) {
        Some(ImageSlot::Ready(handle)) => iced::widget::image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        other => {
            // Still loading or failed: neutral placeholder box. Image
            // failures never become user-visible errors.
            let caption = if matches!(other, Some(ImageSlot::Failed)) {
                "Image unavailable"
            } else {
                ""
            };
            Container::new(Text::new(caption).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::image_placeholder)
                .into()
        }
    };

    let title = Text::new(article.title.as_str())
        .size(typography::TITLE_MD)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let domain = Text::new(article.domain.as_str())
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let description = Text::new(article.description_or_default())
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let position = Text::new(format!("{}/{}", index + 1, navigator.len()))
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    // A button without `on_press` renders disabled, which is exactly the
    // boundary behavior the controls need.
    let mut previous_button = button(
        Text::new("Previous")
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary);
    if navigator.can_previous() {
        previous_button = previous_button.on_press(Message::PreviousArticle);
    }

    let mut next_button = button(
        Text::new("Next")
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary);
    if navigator.can_next() {
        next_button = next_button.on_press(Message::NextArticle);
    }

    let controls = Row::new()
        .spacing(spacing::LG)
        .push(previous_button)
        .push(next_button);

    let card_content = Column::new()
        .spacing(spacing::SM)
        .push(image_block)
        .push(title)
        .push(domain)
        .push(description)
        .push(Space::new().width(Length::Shrink).height(Length::Fixed(spacing::XS)))
        .push(controls)
        .push(position);

    let card = Container::new(card_content)
        .max_width(sizing::CARD_MAX_WIDTH)
        .padding(spacing::MD)
        .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
