// SPDX-License-Identifier: MPL-2.0
//! Step indicator dots for the onboarding flow.

use crate::ui::design_tokens::{palette, sizing, spacing};
use iced::widget::{container, Container, Row};
use iced::{alignment, Background, Border, Element, Length, Theme};

/// Renders `total` dots with the `current` one widened and highlighted.
pub fn pagination_dots<'a, Message: 'a>(total: usize, current: usize) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    for index in 0..total {
        let active = index == current;
        let width = if active {
            sizing::DOT_ACTIVE_WIDTH
        } else {
            sizing::DOT_HEIGHT
        };

        row = row.push(
            Container::new(
                iced::widget::Space::new()
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::DOT_HEIGHT)),
            )
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(if active {
                    palette::WHITE
                } else {
                    palette::TEXT_MUTED
                })),
                border: Border {
                    radius: (sizing::DOT_HEIGHT / 2.0).into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::MD, 0.0])
        .into()
}
