// SPDX-License-Identifier: MPL-2.0
//! Quiz card rendering: topic badge, question, answer options, feedback.

use crate::i18n::I18n;
use crate::quiz::QuizCard;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feed::component::Message;
use crate::ui::styles;
use crate::ui::styles::button::OptionAppearance;
use iced::font::Weight;
use iced::widget::{button, image, Column, Container, Image, Row, Space, Stack, Text};
use iced::{alignment, Color, ContentFit, Element, Font, Length};

const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Renders one quiz card with its answer state.
///
/// `selected` is the locally selected answer for this card, if any; once set
/// the options stop being pressable and the verdict styling plus feedback box
/// appear.
pub fn view<'a>(
    card: &'a QuizCard,
    selected: Option<usize>,
    background: Option<image::Handle>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let answered = selected.is_some();
    let is_correct = selected == Some(card.correct_answer);

    let topic_badge = Container::new(
        Text::new(card.topic.as_str())
            .size(typography::LABEL)
            .color(palette::ACCENT),
    )
    .padding([spacing::XS + 2.0, spacing::MD])
    .style(styles::container::topic_badge);

    let question = Text::new(card.question.as_str())
        .size(typography::TITLE)
        .font(bold())
        .color(palette::TEXT_PRIMARY);

    let mut options = Column::new().spacing(spacing::SM + 2.0);
    for (index, option) in card.options.iter().enumerate() {
        options = options.push(option_row(card, index, option, selected));
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(topic_badge)
        .push(question)
        .push(options);

    if answered {
        content = content.push(feedback_box(card, is_correct, i18n));
        content = content.push(
            Container::new(
                Text::new(i18n.tr("feed-swipe-hint"))
                    .size(typography::CAPTION)
                    .color(palette::TEXT_MUTED),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        );
    }

    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XL, spacing::XL]);

    match background {
        Some(handle) => {
            // Article image behind a heavy dark veil so the text stays legible.
            let picture = Image::new(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill);
            let veil = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| iced::widget::container::Style {
                    background: Some(iced::Background::Color(Color {
                        a: 0.85,
                        ..palette::BACKGROUND
                    })),
                    ..iced::widget::container::Style::default()
                });

            Stack::new().push(picture).push(veil).push(body).into()
        }
        None => Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::card)
            .into(),
    }
}

fn option_row<'a>(
    card: &'a QuizCard,
    index: usize,
    option: &'a str,
    selected: Option<usize>,
) -> Element<'a, Message> {
    let answered = selected.is_some();
    let is_correct_option = index == card.correct_answer;
    let is_wrong_pick = answered && selected == Some(index) && !is_correct_option;

    let appearance = if !answered {
        OptionAppearance::Neutral
    } else if is_correct_option {
        OptionAppearance::Correct
    } else if is_wrong_pick {
        OptionAppearance::Wrong
    } else {
        OptionAppearance::Dimmed
    };

    let (mark, tint) = if answered && is_correct_option {
        ("✓", Some(palette::SUCCESS))
    } else if is_wrong_pick {
        ("✗", Some(palette::DANGER))
    } else {
        (OPTION_LETTERS.get(index).copied().unwrap_or("?"), None)
    };

    let letter = Container::new(Text::new(mark).size(typography::BODY_SM).font(bold()))
        .width(Length::Fixed(sizing::OPTION_LETTER))
        .height(Length::Fixed(sizing::OPTION_LETTER))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::option_letter(tint));

    let label = Text::new(option)
        .size(typography::BODY_SM + 1.0)
        .width(Length::Fill);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(letter)
        .push(label);

    let mut option_button = button(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::button::option(appearance));

    if !answered {
        option_button = option_button.on_press(Message::AnswerSelected(index));
    }

    option_button.into()
}

fn feedback_box<'a>(card: &'a QuizCard, is_correct: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let title_key = if is_correct {
        "feed-feedback-correct"
    } else {
        "feed-feedback-wrong"
    };
    let title_color = if is_correct {
        palette::SUCCESS
    } else {
        palette::DANGER
    };

    let mut column = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr(title_key))
            .size(typography::BODY)
            .font(bold())
            .color(title_color),
    );

    if !card.explanation.is_empty() {
        column = column.push(
            Text::new(card.explanation.as_str())
                .size(typography::BODY_SM)
                .color(palette::TEXT_SECONDARY),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::feedback(is_correct))
        .into()
}
