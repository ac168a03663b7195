// SPDX-License-Identifier: MPL-2.0
//! Quiz domain: the card model, the deck the feed scrolls through, and the
//! card image cache.

pub mod card;
pub mod deck;
pub mod image_cache;

pub use card::{QuizCard, OPTION_COUNT};
pub use deck::{CardDeck, PREFETCH_AT};
pub use image_cache::ImageCache;
