// SPDX-License-Identifier: MPL-2.0
//! Swipeable quiz feed.
//!
//! Composition root for the feed core: raw pointer events flow into the
//! [`gesture`](crate::ui::gesture) interpreter, classified outcomes start
//! [`transition`](crate::ui::transition) animations, and settled transitions
//! mutate the [`CardDeck`](crate::quiz::CardDeck). The component also owns
//! fetch orchestration: the initial load, the single-flight background
//! prefetch near the end of the list, and card image prefetching.

pub mod card;
pub mod component;
mod view;

pub use component::{Effect, Message, State, ViewEnv};
