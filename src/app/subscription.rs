// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only the feed listens to raw events (pointer tracking for the swipe
//! gesture, window resizes for the commit travel) and the animation tick;
//! the other screens are plain form UIs driven entirely by widget messages.

use super::{App, Message, Screen};
use iced::Subscription;

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    match app.screen {
        Screen::Feed => app.feed.subscription().map(Message::Feed),
        Screen::Onboarding | Screen::Detail => Subscription::none(),
    }
}
