// SPDX-License-Identifier: MPL-2.0
//! Feed component state and update logic.

use crate::api::ApiClient;
use crate::error::Error;
use crate::i18n::I18n;
use crate::quiz::{CardDeck, ImageCache, QuizCard};
use crate::ui::gesture::{DragFeedback, GestureInterpreter};
use crate::ui::transition::{Commit, Frame, Transition};
use crate::ui::feed::view;
use iced::{event, mouse, window, Element, Event, Point, Subscription, Task};
use std::time::Instant;

/// How far the spinner advances per animation tick (radians).
const SPINNER_TICK: f32 = 0.15;

/// Fallback viewport height until the first resize event arrives.
const DEFAULT_VIEWPORT_HEIGHT: f32 = 650.0;

/// How many cards ahead of the cursor get their image prefetched.
const IMAGE_PREFETCH_AHEAD: usize = 2;

/// Messages consumed by the feed component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Initial (or refresh) page arrived; tagged with its load generation.
    InitialLoadCompleted {
        generation: u64,
        result: Result<Vec<QuizCard>, Error>,
    },
    /// Background page arrived.
    MoreLoaded(Result<Vec<QuizCard>, Error>),
    /// A card background image finished downloading.
    ImageFetched {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Raw window event routed from the application subscription.
    RawEvent(Event),
    /// Animation frame while a transition or spinner is running.
    Tick,
    /// The user tapped an answer option.
    AnswerSelected(usize),
    /// Refresh button or tap-to-retry.
    ReloadRequested,
}

/// Side effects the application performs after a feed message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Open the detail view with the current card serialized as its payload.
    OpenDetail(String),
}

/// Environment required to render the feed.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub user_name: Option<&'a str>,
}

/// Complete feed component state.
pub struct State {
    deck: CardDeck,
    images: ImageCache,
    gesture: GestureInterpreter,
    transition: Option<Transition>,
    api: ApiClient,
    token: Option<String>,

    // Pointer tracking for the active gesture.
    cursor_position: Option<Point>,
    drag_origin: Option<Point>,

    // Visual state driven by drag feedback and transitions.
    frame: Frame,
    spinner_rotation: f32,
    viewport_height: f32,

    // Answer selection, keyed by card id so it resets on card change.
    selected_answer: Option<usize>,
    answered_card_id: Option<i64>,
}

impl State {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            deck: CardDeck::new(),
            images: ImageCache::with_defaults(),
            gesture: GestureInterpreter::new(),
            transition: None,
            api,
            token: None,
            cursor_position: None,
            drag_origin: None,
            frame: Frame::REST,
            spinner_rotation: 0.0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            selected_answer: None,
            answered_card_id: None,
        }
    }

    /// Stores the session token and kicks off the initial quiz load.
    pub fn start_session(&mut self, token: String) -> Task<Message> {
        self.token = Some(token);
        self.spawn_initial_load()
    }

    /// Handles one feed message; returns the side effect for the application
    /// plus any follow-up task.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::InitialLoadCompleted { generation, result } => {
                self.deck.complete_initial_load(generation, result);
                self.reset_answer_state();
                (Effect::None, self.after_deck_change())
            }
            Message::MoreLoaded(result) => {
                self.deck.complete_load_more(result);
                (Effect::None, self.after_deck_change())
            }
            Message::ImageFetched { url, result } => {
                match result {
                    Ok(bytes) => self.images.insert(url, bytes),
                    Err(err) => {
                        self.images.mark_failed(&url);
                        eprintln!("Failed to fetch card image: {err}");
                    }
                }
                (Effect::None, Task::none())
            }
            Message::RawEvent(event) => (Effect::None, self.handle_raw_event(&event)),
            Message::Tick => self.handle_tick(Instant::now()),
            Message::AnswerSelected(index) => {
                self.select_answer(index);
                (Effect::None, Task::none())
            }
            Message::ReloadRequested => (Effect::None, self.spawn_initial_load()),
        }
    }

    /// Subscriptions: raw pointer/resize events while cards are interactive,
    /// and an animation tick while anything moves.
    pub fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, _window| match &event {
            Event::Mouse(
                mouse::Event::ButtonPressed(mouse::Button::Left)
                | mouse::Event::ButtonReleased(mouse::Button::Left)
                | mouse::Event::CursorMoved { .. },
            )
            | Event::Window(window::Event::Resized(_)) => Some(Message::RawEvent(event.clone())),
            _ => None,
        });

        let needs_ticks = self.transition.is_some()
            || self.deck.is_initial_loading()
            || self.deck.is_fetching_more();
        let ticks = if needs_ticks {
            iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, ticks])
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }

    // =========================================================================
    // Gesture and animation plumbing
    // =========================================================================

    fn handle_raw_event(&mut self, event: &Event) -> Task<Message> {
        match event {
            Event::Window(window::Event::Resized(size)) => {
                self.viewport_height = size.height;
                Task::none()
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_position = Some(*position);
                if let Some(origin) = self.drag_origin {
                    let feedback = self
                        .gesture
                        .update(position.x - origin.x, position.y - origin.y);
                    self.apply_feedback(feedback);
                }
                Task::none()
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                // A gesture may not begin while a previous transition is
                // still animating, and there is nothing to drag without a
                // visible card.
                if self.transition.is_none() && self.deck.current_card().is_some() {
                    if let Some(position) = self.cursor_position {
                        self.drag_origin = Some(position);
                        self.gesture.begin();
                    }
                }
                Task::none()
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if self.drag_origin.take().is_some() {
                    if let Some(outcome) = self.gesture.finish() {
                        self.transition = Some(Transition::start(
                            outcome,
                            self.viewport_height,
                            self.frame,
                            Instant::now(),
                        ));
                    }
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn apply_feedback(&mut self, feedback: Option<DragFeedback>) {
        match feedback {
            Some(DragFeedback::Offset(offset)) => {
                self.frame = Frame {
                    offset,
                    opacity: 1.0,
                };
            }
            Some(DragFeedback::Opacity(opacity)) => {
                self.frame = Frame {
                    offset: 0.0,
                    opacity,
                };
            }
            None => {}
        }
    }

    fn handle_tick(&mut self, now: Instant) -> (Effect, Task<Message>) {
        self.spinner_rotation += SPINNER_TICK;

        let Some(transition) = self.transition else {
            return (Effect::None, Task::none());
        };

        if !transition.is_settled(now) {
            self.frame = transition.sample(now);
            return (Effect::None, Task::none());
        }

        // Commit phase: apply the deck mutation, then reset the driving
        // values instantly so the next card renders centered and opaque.
        self.transition = None;
        self.frame = Frame::REST;

        match transition.commit() {
            Some(Commit::Advance) => {
                self.deck.advance();
                self.sync_answer_state();
                (Effect::None, self.after_deck_change())
            }
            Some(Commit::Retreat) => {
                self.deck.retreat();
                self.sync_answer_state();
                (Effect::None, self.after_deck_change())
            }
            Some(Commit::OpenDetail) => {
                let effect = self
                    .deck
                    .current_card()
                    .map(|card| Effect::OpenDetail(card.to_payload()))
                    .unwrap_or(Effect::None);
                (effect, Task::none())
            }
            None => (Effect::None, Task::none()),
        }
    }

    // =========================================================================
    // Fetch orchestration
    // =========================================================================

    fn spawn_initial_load(&mut self) -> Task<Message> {
        let Some(token) = self.token.clone() else {
            return Task::none();
        };

        let generation = self.deck.begin_initial_load();
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_quiz(&token).await },
            move |result| Message::InitialLoadCompleted { generation, result },
        )
    }

    /// Re-evaluates everything that depends on the cursor or list length:
    /// the level-triggered prefetch condition and image prefetching.
    fn after_deck_change(&mut self) -> Task<Message> {
        Task::batch([self.maybe_load_more(), self.prefetch_images()])
    }

    fn maybe_load_more(&mut self) -> Task<Message> {
        let Some(token) = self.token.clone() else {
            return Task::none();
        };
        if !self.deck.should_prefetch() {
            return Task::none();
        }
        if !self.deck.begin_load_more() {
            return Task::none();
        }

        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_quiz(&token).await },
            Message::MoreLoaded,
        )
    }

    fn prefetch_images(&mut self) -> Task<Message> {
        let urls: Vec<String> = (0..=IMAGE_PREFETCH_AHEAD)
            .filter_map(|offset| self.deck.peek(offset))
            .filter(|card| card.has_image())
            .filter_map(|card| card.image_url.clone())
            .collect();

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.images.claim(url))
            .map(|url| {
                let api = self.api.clone();
                let fetched = url.clone();
                Task::perform(
                    async move { api.fetch_image(&fetched).await },
                    move |result| Message::ImageFetched {
                        url: url.clone(),
                        result,
                    },
                )
            })
            .collect();

        Task::batch(tasks)
    }

    // =========================================================================
    // Answer selection (keyed by card id)
    // =========================================================================

    fn select_answer(&mut self, index: usize) {
        if self.selected_answer.is_some() {
            return;
        }
        if let Some(card) = self.deck.current_card() {
            if index < card.options.len() {
                self.selected_answer = Some(index);
                self.answered_card_id = Some(card.id);
            }
        }
    }

    /// Drops the selection when the visible card's id no longer matches the
    /// one it was made on.
    fn sync_answer_state(&mut self) {
        let current_id = self.deck.current_card().map(|card| card.id);
        if current_id != self.answered_card_id {
            self.reset_answer_state();
        }
    }

    fn reset_answer_state(&mut self) {
        self.selected_answer = None;
        self.answered_card_id = None;
    }

    // =========================================================================
    // Read-only projections for the view
    // =========================================================================

    #[must_use]
    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    /// Immutable image lookup used by the view (no LRU touch).
    #[must_use]
    pub(crate) fn images(&self) -> &ImageCache {
        &self.images
    }
}
