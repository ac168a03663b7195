// SPDX-License-Identifier: MPL-2.0
//! Onboarding flow: welcome → name → email → API key → interests.
//!
//! Five fixed steps collecting the registration form, each gated by its own
//! validation before "Continue" unlocks. The final step submits the
//! registration; failure keeps the user on the interests step with an inline
//! error instead of losing their input.

mod view;

use crate::api::RegisterRequest;

/// Topics offered on the interests step. These double as API values, so they
/// are not localized.
pub const TOPICS: [&str; 8] = [
    "Technology",
    "Politics",
    "Climate",
    "Science",
    "Culture",
    "Economy",
    "Health",
    "Sports",
];

/// Minimum plausible length for a Gemini API key.
const API_KEY_MIN_LEN: usize = 10;

/// Total number of onboarding steps, for the pagination dots.
pub const STEP_COUNT: usize = 5;

/// One screen of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Welcome,
    Name,
    Email,
    ApiKey,
    Interests,
}

impl Step {
    /// Position in the flow, for the pagination dots.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Name => 1,
            Step::Email => 2,
            Step::ApiKey => 3,
            Step::Interests => 4,
        }
    }

    fn next(self) -> Step {
        match self {
            Step::Welcome => Step::Name,
            Step::Name => Step::Email,
            Step::Email => Step::ApiKey,
            Step::ApiKey | Step::Interests => Step::Interests,
        }
    }
}

/// Registration form data accumulated across the steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingData {
    pub name: String,
    pub email: String,
    pub gemini_api_key: String,
    pub interests: Vec<String>,
}

/// Messages emitted by the onboarding screens.
#[derive(Debug, Clone)]
pub enum Message {
    ContinuePressed,
    NameChanged(String),
    EmailChanged(String),
    ApiKeyChanged(String),
    TopicToggled(String),
    SubmitPressed,
}

/// Side effects the application performs after an onboarding message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Register the collected form against the backend.
    Register(RegisterRequest),
}

/// Onboarding component state.
#[derive(Debug, Default)]
pub struct State {
    step: Step,
    data: OnboardingData,
    is_submitting: bool,
    submit_error: Option<String>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::ContinuePressed => {
                if self.can_continue() {
                    self.step = self.step.next();
                }
                Effect::None
            }
            Message::NameChanged(name) => {
                self.data.name = name;
                Effect::None
            }
            Message::EmailChanged(email) => {
                self.data.email = email;
                Effect::None
            }
            Message::ApiKeyChanged(key) => {
                self.data.gemini_api_key = key;
                Effect::None
            }
            Message::TopicToggled(topic) => {
                if let Some(position) = self.data.interests.iter().position(|t| *t == topic) {
                    self.data.interests.remove(position);
                } else {
                    self.data.interests.push(topic);
                }
                Effect::None
            }
            Message::SubmitPressed => {
                if self.is_submitting || !self.can_continue() {
                    return Effect::None;
                }
                self.is_submitting = true;
                self.submit_error = None;
                Effect::Register(RegisterRequest {
                    name: self.data.name.trim().to_string(),
                    email: self.data.email.trim().to_string(),
                    interests: self.data.interests.clone(),
                    gemini_api_key: self.data.gemini_api_key.trim().to_string(),
                })
            }
        }
    }

    /// Records a failed registration; the user stays on the interests step.
    pub fn submit_failed(&mut self, message: String) {
        self.is_submitting = false;
        self.submit_error = Some(message);
    }

    /// Whether the current step's validation gate is satisfied.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        match self.step {
            Step::Welcome => true,
            Step::Name => !self.data.name.trim().is_empty(),
            Step::Email => self.data.email.contains('@'),
            Step::ApiKey => self.data.gemini_api_key.len() >= API_KEY_MIN_LEN,
            Step::Interests => !self.data.interests.is_empty(),
        }
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn data(&self) -> &OnboardingData {
        &self.data
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn view<'a>(&'a self, i18n: &'a crate::i18n::I18n) -> iced::Element<'a, Message> {
        view::view(self, i18n)
    }
}
