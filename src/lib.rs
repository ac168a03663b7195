// SPDX-License-Identifier: MPL-2.0
//! `unrot` is a desktop client for the Unrot quiz service, built with the
//! Iced GUI framework.
//!
//! It onboards a user, registers them against the backend, and presents
//! AI-generated news quiz cards in a swipeable feed: swipe up/down to page
//! between cards, swipe left for the detail view, swipe right to go back a
//! card. The gesture classification, transition timing and pagination logic
//! are plain state machines under [`ui::gesture`], [`ui::transition`] and
//! [`quiz::deck`], independent of any widget code.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod quiz;
pub mod ui;
