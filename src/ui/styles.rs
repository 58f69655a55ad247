// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button {
    use crate::ui::design_tokens::{palette, radius, shadow};
    use iced::widget::button;
    use iced::{Background, Border, Theme};

    /// Primary action button (the Previous/Next controls).
    ///
    /// Buttons built without `on_press` receive the `Disabled` status, which
    /// is how the reader grays out a control at a list boundary.
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        match status {
            button::Status::Active | button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: palette::WHITE,
                border: Border {
                    color: palette::PRIMARY_600,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            },
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(palette::PRIMARY_400)),
                text_color: palette::WHITE,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(palette::GRAY_200)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }
}

pub mod container {
    use crate::ui::design_tokens::{palette, radius};
    use iced::widget::container;
    use iced::{Background, Border, Theme};

    /// Bordered card that frames the current article.
    pub fn card(theme: &Theme) -> container::Style {
        let extended = theme.extended_palette();

        container::Style {
            background: Some(Background::Color(extended.background.base.color)),
            border: Border {
                color: extended.background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }

    /// The dark pill-shaped track the knob slides along.
    pub fn swipe_track(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            text_color: Some(palette::WHITE),
            ..Default::default()
        }
    }

    /// The round white knob the user drags.
    pub fn swipe_knob(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::WHITE)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            text_color: Some(palette::GRAY_700),
            ..Default::default()
        }
    }

    /// Neutral box standing in for an article image that is still loading
    /// or failed to load.
    pub fn image_placeholder(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::GRAY_100)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            text_color: Some(palette::GRAY_400),
            ..Default::default()
        }
    }
}
