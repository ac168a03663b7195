// SPDX-License-Identifier: MPL-2.0
//! Onboarding screen rendering.

use crate::i18n::I18n;
use crate::ui::components::{chip, pagination_dots};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::onboarding::{Message, State, Step, STEP_COUNT, TOPICS};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Font, Length, Theme};

pub(super) fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let content = match state.step() {
        Step::Welcome => welcome(i18n),
        Step::Name => name(state, i18n),
        Step::Email => email(state, i18n),
        Step::ApiKey => api_key(state, i18n),
        Step::Interests => interests(state, i18n),
    };

    let footer = footer(state, i18n);

    let layout = Column::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center)
                .padding([0.0, spacing::XL]),
        )
        .push(footer);

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::background)
        .into()
}

fn welcome<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let hero = Font {
        weight: Weight::Black,
        ..Font::default()
    };

    Column::new()
        .spacing(spacing::LG)
        .push(logo())
        .push(
            Column::new()
                .push(
                    Text::new(i18n.tr("onboarding-welcome-title"))
                        .size(typography::HERO)
                        .font(hero)
                        .color(palette::TEXT_PRIMARY),
                )
                .push(
                    Text::new(i18n.tr("onboarding-welcome-accent"))
                        .size(typography::HERO)
                        .font(hero)
                        .color(palette::TEXT_MUTED),
                ),
        )
        .push(
            Text::new(i18n.tr("onboarding-welcome-tagline"))
                .size(typography::BODY)
                .color(palette::TEXT_SECONDARY),
        )
        .into()
}

fn name<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    form_step(
        i18n.tr("onboarding-name-label"),
        i18n.tr("onboarding-name-heading"),
        None,
        input(
            i18n.tr("onboarding-name-placeholder"),
            &state.data().name,
            Message::NameChanged,
        ),
    )
}

fn email<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    form_step(
        i18n.tr("onboarding-email-label"),
        i18n.tr("onboarding-email-heading"),
        None,
        input(
            i18n.tr("onboarding-email-placeholder"),
            &state.data().email,
            Message::EmailChanged,
        ),
    )
}

fn api_key<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    form_step(
        i18n.tr("onboarding-apikey-label"),
        i18n.tr("onboarding-apikey-heading"),
        Some(i18n.tr("onboarding-apikey-subtitle")),
        input(
            i18n.tr("onboarding-apikey-placeholder"),
            &state.data().gemini_api_key,
            Message::ApiKeyChanged,
        ),
    )
}

fn interests<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::SM);
    for chunk in TOPICS.chunks(3) {
        let mut row = Row::new().spacing(spacing::SM);
        for topic in chunk {
            let selected = state.data().interests.iter().any(|t| t == topic);
            row = row.push(chip(
                topic,
                selected,
                Message::TopicToggled((*topic).to_string()),
            ));
        }
        grid = grid.push(row);
    }

    form_step(
        i18n.tr("onboarding-interests-label"),
        i18n.tr("onboarding-interests-heading"),
        None,
        grid.into(),
    )
}

fn form_step<'a>(
    label: String,
    heading: String,
    subtitle: Option<String>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(label)
                .size(typography::LABEL)
                .color(palette::TEXT_SECONDARY),
        )
        .push(
            Text::new(heading)
                .size(typography::H1)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .color(palette::TEXT_PRIMARY),
        );

    if let Some(subtitle) = subtitle {
        column = column.push(
            Text::new(subtitle)
                .size(typography::BODY)
                .color(palette::TEXT_SECONDARY),
        );
    }

    column
        .push(Space::new().width(Length::Shrink).height(Length::Fixed(spacing::SM)))
        .push(control)
        .into()
}

fn input<'a>(
    placeholder: String,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let field = text_input(&placeholder, value)
        .on_input(on_input)
        .size(typography::H2)
        .padding([spacing::SM, 0.0])
        .style(|_theme: &Theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: palette::TEXT_MUTED,
            placeholder: palette::TEXT_MUTED,
            value: palette::TEXT_PRIMARY,
            selection: Color {
                a: 0.4,
                ..palette::ACCENT
            },
        });

    Column::new()
        .push(field)
        .push(
            Container::new(Space::new().width(Length::Fill).height(Length::Fixed(2.0)))
                .width(Length::Fill)
                .style(styles::container::input_underline),
        )
        .into()
}

fn footer<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let is_final = state.step() == Step::Interests;

    let (label, message) = if is_final {
        (i18n.tr("onboarding-submit"), Message::SubmitPressed)
    } else {
        (
            format!("{} →", i18n.tr("onboarding-continue")),
            Message::ContinuePressed,
        )
    };

    let label = if state.is_submitting() {
        "…".to_string()
    } else {
        label
    };

    let mut submit = button(
        Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::MD, spacing::LG])
    .style(styles::button::primary);

    if state.can_continue() && !state.is_submitting() {
        submit = submit.on_press(message);
    }

    let mut column = Column::new().padding([0.0, spacing::XL]);

    if let Some(error) = state.submit_error() {
        column = column.push(
            Container::new(
                Text::new(error)
                    .size(typography::BODY_SM)
                    .color(palette::DANGER),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::SM, 0.0]),
        );
    }

    column
        .push(submit)
        .push(pagination_dots(STEP_COUNT, state.step().index()))
        .into()
}

const LOGO_SIZE: f32 = 56.0;
const LOGO_RING_SIZE: f32 = 22.0;

fn logo<'a>() -> Element<'a, Message> {
    // White rounded square with a ring cut-out, echoing the app icon.
    let ring = Container::new(
        Space::new()
            .width(Length::Fixed(LOGO_RING_SIZE))
            .height(Length::Fixed(LOGO_RING_SIZE)),
    )
    .style(|_theme: &Theme| iced::widget::container::Style {
        border: Border {
            color: palette::BACKGROUND,
            width: 5.0,
            radius: (LOGO_RING_SIZE / 2.0).into(),
        },
        ..iced::widget::container::Style::default()
    });

    Container::new(ring)
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::WHITE)),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..iced::widget::container::Style::default()
        })
        .into()
}
