// SPDX-License-Identifier: MPL-2.0
//! Selectable interest chip.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::Element;

/// Renders a pill-shaped toggle chip; `on_press` fires on every tap so the
/// caller flips the selection.
pub fn chip<'a, Message: Clone + 'a>(
    label: &'a str,
    selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::SM + 2.0, spacing::LG])
        .style(styles::button::chip(selected))
        .on_press(on_press)
        .into()
}
