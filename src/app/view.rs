// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the screen the [`Screen`](super::Screen) state selects; each
//! screen component owns its own layout.

use super::{App, Message, Screen};
use crate::ui::feed;
use iced::Element;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Onboarding => app.onboarding.view(&app.i18n).map(Message::Onboarding),
        Screen::Feed => app
            .feed
            .view(feed::ViewEnv {
                i18n: &app.i18n,
                user_name: app.session.as_ref().map(|session| session.name.as_str()),
            })
            .map(Message::Feed),
        Screen::Detail => app.detail.view(&app.i18n).map(Message::Detail),
    }
}
