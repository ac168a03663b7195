// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the onboarding, feed and
//! detail screens.
//!
//! The `App` struct wires together the components and translates their
//! effects into side effects like registration calls or screen switches.
//! Policy decisions (window sizing, which screen owns the subscriptions,
//! how registration failures are worded) stay close to the main update loop
//! so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::config;
use crate::i18n::I18n;
use crate::ui::{detail, feed, onboarding};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Registered identity for the current session. Never persisted; closing the
/// app forgets it.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub name: String,
    pub email: String,
}

/// Root Iced application state bridging UI components, localization and the
/// backend client.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    onboarding: onboarding::State,
    feed: feed::State,
    detail: detail::State,
    session: Option<Session>,
    api: ApiClient,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let server_url = flags
            .server
            .as_deref()
            .unwrap_or_else(|| config.server_url())
            .to_string();
        let api = ApiClient::new(server_url);

        let app = App {
            i18n,
            screen: Screen::Onboarding,
            onboarding: onboarding::State::new(),
            feed: feed::State::new(api.clone()),
            detail: detail::State::default(),
            session: None,
            api,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Unrot".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}
