// SPDX-License-Identifier: MPL-2.0
//! REST client for the Unrot backend.
//!
//! Two calls matter: registering a user during onboarding and fetching a page
//! of quiz cards for the feed. Both return typed payloads; non-success HTTP
//! statuses are converted to [`crate::error::Error::Api`] carrying the
//! response body, so the message the backend wrote is what the user sees.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{AuthResponse, QuizResponse, RegisterRequest};
