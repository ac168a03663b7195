// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Root window background.
pub fn background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Card surface behind the question and options.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CARD)),
        ..container::Style::default()
    }
}

/// Rounded topic badge at the top of a card.
pub fn topic_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: 0.15,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..container::Style::default()
    }
}

/// Feedback box shown under the options once the card is answered.
pub fn feedback(correct: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let tint = if correct {
            palette::SUCCESS
        } else {
            palette::DANGER
        };
        container::Style {
            background: Some(Background::Color(Color { a: 0.08, ..tint })),
            border: Border {
                color: Color { a: 0.25, ..tint },
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..container::Style::default()
        }
    }
}

/// Floating pill that hosts the "loading more" indicator.
pub fn loading_more_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.85,
            ..palette::BACKGROUND
        })),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::TEXT_SECONDARY),
        ..container::Style::default()
    }
}

/// Highlighted box around the correct answer on the detail view.
pub fn answer_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.08,
            ..palette::SUCCESS
        })),
        border: Border {
            color: Color {
                a: 0.25,
                ..palette::SUCCESS
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Circle in front of an answer option holding its letter or verdict mark.
pub fn option_letter(tint: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| match tint {
        Some(color) => container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        },
        None => container::Style {
            background: Some(Background::Color(Color {
                a: 0.08,
                ..palette::WHITE
            })),
            border: Border {
                color: Color {
                    a: 0.2,
                    ..palette::WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            text_color: Some(palette::WHITE),
            ..container::Style::default()
        },
    }
}

/// 2px underline below onboarding text inputs.
pub fn input_underline(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_tint_follows_verdict() {
        let theme = Theme::Dark;
        let correct = feedback(true)(&theme);
        let wrong = feedback(false)(&theme);
        assert_ne!(correct.border.color, wrong.border.color);
    }
}
