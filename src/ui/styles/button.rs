// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action: white pill, black text (onboarding "Continue").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: 0.9,
            ..palette::WHITE
        },
        button::Status::Disabled => Color {
            a: 0.3,
            ..palette::WHITE
        },
        _ => palette::WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BACKGROUND,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        ..button::Style::default()
    }
}

/// Bordered secondary action (detail-view SHARE / BACK).
pub fn outline(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => palette::TEXT_SECONDARY,
        _ => palette::BORDER,
    };

    button::Style {
        background: None,
        text_color: palette::TEXT_SECONDARY,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

/// Outline variant with the accent border (detail-view BACK).
pub fn outline_accent(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::TEXT_SECONDARY,
        border: Border {
            color: palette::ACCENT,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..button::Style::default()
    }
}

/// Borderless text action (retry link, header refresh, source link).
pub fn text(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered => Color { a: 0.8, ..color },
            _ => color,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..button::Style::default()
        }
    }
}

/// Interest chip: outlined when unselected, filled white when selected.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| {
        if selected {
            button::Style {
                background: Some(Background::Color(palette::WHITE)),
                text_color: palette::BACKGROUND,
                border: Border {
                    color: palette::WHITE,
                    width: 1.0,
                    radius: radius::FULL.into(),
                },
                ..button::Style::default()
            }
        } else {
            button::Style {
                background: None,
                text_color: palette::TEXT_SECONDARY,
                border: Border {
                    color: palette::CHIP_OUTLINE,
                    width: 1.0,
                    radius: radius::FULL.into(),
                },
                ..button::Style::default()
            }
        }
    }
}

/// Visual state of one answer option after (or before) answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAppearance {
    /// Not answered yet: neutral, pressable.
    Neutral,
    /// This is the correct option (always highlighted once answered).
    Correct,
    /// The user picked this one and it was wrong.
    Wrong,
    /// Any other option once the card is answered.
    Dimmed,
}

/// Answer-option row style for the given appearance.
pub fn option(appearance: OptionAppearance) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| {
        let (background, border_color, text_color) = match appearance {
            OptionAppearance::Neutral => (
                Color {
                    a: 0.85,
                    ..palette::SURFACE
                },
                Color {
                    a: 0.12,
                    ..palette::WHITE
                },
                palette::TEXT_PRIMARY,
            ),
            OptionAppearance::Correct => (
                Color {
                    a: 0.15,
                    ..palette::SUCCESS
                },
                palette::SUCCESS,
                palette::SUCCESS,
            ),
            OptionAppearance::Wrong => (
                Color {
                    a: 0.15,
                    ..palette::DANGER
                },
                palette::DANGER,
                palette::DANGER,
            ),
            OptionAppearance::Dimmed => (
                Color {
                    a: 0.35,
                    ..palette::SURFACE
                },
                Color {
                    a: 0.05,
                    ..palette::WHITE
                },
                palette::TEXT_MUTED,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.5,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}
