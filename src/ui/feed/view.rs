// SPDX-License-Identifier: MPL-2.0
//! Feed screen layout: header plus the card area in its four states
//! (loading, error, empty, showing cards).

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feed::card;
use crate::ui::feed::component::{Message, State, ViewEnv};
use crate::ui::styles;
use crate::ui::widgets::{slide, AnimatedSpinner};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Font, Length};

pub(super) fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let deck = state.deck();

    let body: Element<'a, Message> = if deck.is_initial_loading() {
        loading_view(state, env.i18n)
    } else if let Some(error) = deck.load_error() {
        error_view(error, env.i18n)
    } else if deck.is_empty() {
        empty_view(env.i18n)
    } else {
        card_area(state, env.i18n)
    };

    let layout = Column::new().push(header(env.user_name)).push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::background)
        .into()
}

fn header<'a>(user_name: Option<&'a str>) -> Element<'a, Message> {
    let title = Text::new("UNROT")
        .size(typography::BODY)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .color(palette::TEXT_PRIMARY);

    let refresh = button(Text::new("↻").size(typography::BODY).color(palette::ACCENT))
        .style(styles::button::text(palette::ACCENT))
        .on_press(Message::ReloadRequested);

    let mut row = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::MD])
        .push(title)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(refresh);

    if let Some(name) = user_name {
        row = row.push(
            Text::new(name.to_uppercase())
                .size(typography::LABEL)
                .color(palette::TEXT_SECONDARY),
        );
    }

    row.into()
}

fn loading_view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(
        palette::WHITE,
        sizing::SPINNER,
        state.spinner_rotation(),
    )
    .into_element();

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(
            Text::new(i18n.tr("feed-loading-title"))
                .size(typography::H2)
                .color(palette::TEXT_PRIMARY),
        )
        .push(
            Text::new(i18n.tr("feed-loading-subtitle"))
                .size(typography::BODY)
                .color(palette::TEXT_SECONDARY),
        );

    centered(content.into())
}

fn error_view<'a>(error: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    let retry = button(
        Text::new(i18n.tr("feed-retry-hint"))
            .size(typography::BODY)
            .color(palette::ACCENT),
    )
    .style(styles::button::text(palette::ACCENT))
    .on_press(Message::ReloadRequested);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(error)
                .size(typography::H2)
                .color(palette::TEXT_PRIMARY),
        )
        .push(retry);

    centered(content.into())
}

fn empty_view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    centered(
        Text::new(i18n.tr("feed-empty"))
            .size(typography::H2)
            .color(palette::TEXT_PRIMARY)
            .into(),
    )
}

fn card_area<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let deck = state.deck();
    let Some(current) = deck.current_card() else {
        return empty_view(i18n);
    };

    let background = current
        .image_url
        .as_deref()
        .and_then(|url| state.images().peek(url));

    let frame = state.frame();
    let card_view = card::view(current, state.selected_answer(), background, i18n);
    let sliding_card = slide(card_view, frame.offset);

    let mut stack = Stack::new().push(sliding_card);

    // Horizontal drags fade the card toward the background; a veil of the
    // background color with the complementary alpha reads the same as
    // lowering the card's opacity.
    if frame.opacity < 1.0 {
        let veil_alpha = (1.0 - frame.opacity).clamp(0.0, 1.0);
        stack = stack.push(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(Color {
                        a: veil_alpha,
                        ..palette::BACKGROUND
                    })),
                    ..iced::widget::container::Style::default()
                }),
        );
    }

    if deck.is_fetching_more() {
        stack = stack.push(loading_more_bar(state, i18n));
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loading_more_bar<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(
        palette::ACCENT,
        sizing::SPINNER / 3.0,
        state.spinner_rotation(),
    )
    .into_element();

    let bar = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(spinner)
            .push(
                Text::new(i18n.tr("feed-loading-more"))
                    .size(typography::LABEL)
                    .color(palette::TEXT_SECONDARY),
            ),
    )
    .padding([spacing::XS + 2.0, spacing::MD])
    .style(styles::container::loading_more_bar);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}
