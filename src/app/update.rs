// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen, Session};
use crate::error::Error;
use crate::ui::{detail, feed, onboarding};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Onboarding(message) => handle_onboarding(app, message),
        Message::RegisterCompleted(result) => handle_register_completed(app, result),
        Message::Feed(message) => handle_feed(app, message),
        Message::Detail(message) => handle_detail(app, message),
    }
}

fn handle_onboarding(app: &mut App, message: onboarding::Message) -> Task<Message> {
    match app.onboarding.handle_message(message) {
        onboarding::Effect::None => Task::none(),
        onboarding::Effect::Register(request) => {
            let api = app.api.clone();
            Task::perform(
                async move { api.register(&request).await },
                Message::RegisterCompleted,
            )
        }
    }
}

fn handle_register_completed(
    app: &mut App,
    result: Result<crate::api::AuthResponse, Error>,
) -> Task<Message> {
    match result {
        Ok(auth) => {
            app.session = Some(Session {
                token: auth.token.clone(),
                name: auth.name,
                email: auth.email,
            });
            app.screen = Screen::Feed;
            app.feed.start_session(auth.token).map(Message::Feed)
        }
        Err(err) => {
            // The backend's own message when it sent one; a generic hint for
            // transport failures (typically a backend that is not running).
            let message = match err {
                Error::Api(message) => message,
                _ => app.i18n.tr("onboarding-register-failed"),
            };
            app.onboarding.submit_failed(message);
            Task::none()
        }
    }
}

fn handle_feed(app: &mut App, message: feed::Message) -> Task<Message> {
    let (effect, task) = app.feed.handle_message(message);

    match effect {
        feed::Effect::None => {}
        feed::Effect::OpenDetail(payload) => {
            app.detail = detail::State::from_payload(&payload);
            app.screen = Screen::Detail;
        }
    }

    task.map(Message::Feed)
}

fn handle_detail(app: &mut App, message: detail::Message) -> Task<Message> {
    match app.detail.handle_message(message) {
        detail::Effect::None => Task::none(),
        detail::Effect::Back => {
            app.screen = Screen::Feed;
            Task::none()
        }
        detail::Effect::CopyToClipboard(text) => iced::clipboard::write(text),
    }
}
