// SPDX-License-Identifier: MPL-2.0
//! Card deck: the list of quiz cards, the cursor into it, and the fetch
//! bookkeeping around both.
//!
//! The deck owns all feed state the UI projects from: the ordered card list,
//! the current index, the initial/background loading flags, and the visible
//! load error. It is a pure state machine — every network round trip is split
//! into a `begin_*` call (made before the request is spawned) and a
//! `complete_*` call (made when the response message arrives back on the
//! update loop), so the whole lifecycle is testable without any I/O.
//!
//! Two guards matter here:
//!
//! - `load_more` is single-flight: [`CardDeck::begin_load_more`] is a
//!   compare-and-set on the in-flight flag, so a fast scroller and the
//!   level-triggered prefetch condition cannot race two requests.
//! - `load_initial` carries a generation counter: a refresh issued while an
//!   older request is still in flight bumps the generation, and the stale
//!   response is discarded when it eventually lands instead of overwriting
//!   the fresher one.

use crate::error::Error;
use crate::quiz::QuizCard;

/// Start loading more cards once the user is this close to the end.
pub const PREFETCH_AT: usize = 6;

/// Feed card list with its cursor and fetch state.
#[derive(Debug, Default)]
pub struct CardDeck {
    cards: Vec<QuizCard>,
    current_index: usize,
    is_initial_loading: bool,
    is_fetching_more: bool,
    load_error: Option<String>,
    load_generation: u64,
}

impl CardDeck {
    /// Creates an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of an initial load (or a refresh) and returns the
    /// generation tag the caller must hand back to
    /// [`complete_initial_load`](Self::complete_initial_load).
    ///
    /// Clears any previous error so the loading state replaces the error
    /// state visually.
    pub fn begin_initial_load(&mut self) -> u64 {
        self.is_initial_loading = true;
        self.load_error = None;
        self.load_generation += 1;
        self.load_generation
    }

    /// Applies the result of an initial load.
    ///
    /// A result tagged with a superseded generation is dropped entirely: a
    /// newer refresh is already in flight and owns the loading state. On
    /// success the list is replaced and the cursor returns to the first card;
    /// on failure the error message becomes visible and the list stays empty.
    pub fn complete_initial_load(&mut self, generation: u64, result: Result<Vec<QuizCard>, Error>) {
        if generation != self.load_generation {
            return;
        }

        self.is_initial_loading = false;
        match result {
            Ok(cards) => {
                self.cards = cards;
                self.current_index = 0;
                self.load_error = None;
            }
            Err(err) => {
                self.cards.clear();
                self.current_index = 0;
                self.load_error = Some(err.to_string());
            }
        }
    }

    /// Tries to claim the single background-fetch slot.
    ///
    /// Returns `true` if the caller now owns the slot and must spawn exactly
    /// one request; `false` means a fetch is already outstanding and this
    /// trigger collapses into it.
    pub fn begin_load_more(&mut self) -> bool {
        if self.is_fetching_more {
            return false;
        }
        self.is_fetching_more = true;
        true
    }

    /// Applies the result of a background fetch.
    ///
    /// New cards are appended with their ids renumbered to
    /// `previous_len + offset`, keeping ids unique and contiguous across the
    /// accumulated list regardless of what the server assigned. Failures are
    /// reported to stderr and otherwise swallowed — the user is never
    /// interrupted by a prefetch error, and the level-triggered prefetch
    /// condition will simply fire again.
    pub fn complete_load_more(&mut self, result: Result<Vec<QuizCard>, Error>) {
        match result {
            Ok(page) => {
                let base = self.cards.len() as i64;
                self.cards
                    .extend(page.into_iter().enumerate().map(|(offset, mut card)| {
                        card.id = base + offset as i64;
                        card
                    }));
            }
            Err(err) => {
                eprintln!("Failed to load more cards: {err}");
            }
        }
        self.is_fetching_more = false;
    }

    /// Moves the cursor to the next card, saturating at the last loaded one.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.cards.len() {
            self.current_index += 1;
        }
    }

    /// Moves the cursor to the previous card, saturating at the first.
    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Level-triggered prefetch condition.
    ///
    /// True whenever the cursor is within [`PREFETCH_AT`] cards of the end of
    /// a non-empty list and no background fetch is outstanding. The feed
    /// re-evaluates this after every cursor or list-length change; it is not
    /// a one-shot edge.
    #[must_use]
    pub fn should_prefetch(&self) -> bool {
        !self.cards.is_empty()
            && !self.is_fetching_more
            && self.current_index >= self.cards.len().saturating_sub(PREFETCH_AT)
    }

    /// Returns the card under the cursor, if any cards are loaded.
    #[must_use]
    pub fn current_card(&self) -> Option<&QuizCard> {
        self.cards.get(self.current_index)
    }

    /// All loaded cards, in feed order.
    #[must_use]
    pub fn cards(&self) -> &[QuizCard] {
        &self.cards
    }

    /// Returns a nearby card by signed offset from the cursor, used for
    /// image prefetching.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<&QuizCard> {
        self.cards.get(self.current_index + offset)
    }

    /// Cursor position, defined only once cards are loaded.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_initial_loading(&self) -> bool {
        self.is_initial_loading
    }

    #[must_use]
    pub fn is_fetching_more(&self) -> bool {
        self.is_fetching_more
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64) -> QuizCard {
        QuizCard {
            id,
            topic: "Science".to_string(),
            question: format!("Question {id}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0,
            explanation: String::new(),
            source_name: String::new(),
            source_url: String::new(),
            image_url: None,
        }
    }

    fn cards(n: usize) -> Vec<QuizCard> {
        (0..n).map(|i| card(i as i64)).collect()
    }

    fn loaded_deck(n: usize) -> CardDeck {
        let mut deck = CardDeck::new();
        let generation = deck.begin_initial_load();
        deck.complete_initial_load(generation, Ok(cards(n)));
        deck
    }

    #[test]
    fn new_deck_is_empty_with_no_index() {
        let deck = CardDeck::new();
        assert!(deck.is_empty());
        assert_eq!(deck.current_index(), None);
        assert_eq!(deck.current_card(), None);
        assert!(!deck.should_prefetch());
    }

    #[test]
    fn initial_load_replaces_cards_and_resets_index() {
        let mut deck = loaded_deck(3);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.current_index(), Some(0));
        assert!(!deck.is_initial_loading());

        deck.advance();
        let generation = deck.begin_initial_load();
        deck.complete_initial_load(generation, Ok(cards(2)));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.current_index(), Some(0));
    }

    #[test]
    fn initial_load_failure_sets_error_and_leaves_cards_empty() {
        let mut deck = CardDeck::new();
        let generation = deck.begin_initial_load();
        assert!(deck.is_initial_loading());

        deck.complete_initial_load(generation, Err(Error::Api("quiz fetch failed".into())));
        assert!(!deck.is_initial_loading());
        assert!(deck.is_empty());
        assert!(deck.load_error().is_some());
    }

    #[test]
    fn begin_initial_load_clears_previous_error() {
        let mut deck = CardDeck::new();
        let generation = deck.begin_initial_load();
        deck.complete_initial_load(generation, Err(Error::Api("boom".into())));
        assert!(deck.load_error().is_some());

        deck.begin_initial_load();
        assert_eq!(deck.load_error(), None);
    }

    #[test]
    fn stale_initial_load_response_is_discarded() {
        let mut deck = CardDeck::new();
        let first = deck.begin_initial_load();
        // User taps refresh before the first request resolves.
        let second = deck.begin_initial_load();

        // The first (stale) response lands afterwards: it must not clear the
        // loading flag nor overwrite anything.
        deck.complete_initial_load(first, Ok(cards(5)));
        assert!(deck.is_initial_loading());
        assert!(deck.is_empty());

        deck.complete_initial_load(second, Ok(cards(2)));
        assert!(!deck.is_initial_loading());
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn advance_saturates_at_last_card() {
        let mut deck = loaded_deck(3);
        deck.advance();
        deck.advance();
        deck.advance();
        deck.advance();
        assert_eq!(deck.current_index(), Some(2));
    }

    #[test]
    fn retreat_saturates_at_first_card() {
        let mut deck = loaded_deck(3);
        deck.retreat();
        assert_eq!(deck.current_index(), Some(0));

        deck.advance();
        deck.retreat();
        deck.retreat();
        assert_eq!(deck.current_index(), Some(0));
    }

    #[test]
    fn advance_and_retreat_on_empty_deck_are_noops() {
        let mut deck = CardDeck::new();
        deck.advance();
        deck.retreat();
        assert_eq!(deck.current_index(), None);
    }

    #[test]
    fn load_more_appends_with_renumbered_ids() {
        let mut deck = loaded_deck(10);
        assert!(deck.begin_load_more());

        // Server re-sends ids starting at 0; the deck renumbers by position.
        deck.complete_load_more(Ok(cards(4)));
        assert_eq!(deck.len(), 14);
        let appended: Vec<i64> = deck.cards()[10..].iter().map(|c| c.id).collect();
        assert_eq!(appended, vec![10, 11, 12, 13]);
    }

    #[test]
    fn load_more_is_single_flight() {
        let mut deck = loaded_deck(10);
        assert!(deck.begin_load_more());
        // Second trigger before the first resolves: collapses, no new request.
        assert!(!deck.begin_load_more());
        assert!(deck.is_fetching_more());

        deck.complete_load_more(Ok(cards(2)));
        assert!(!deck.is_fetching_more());
        assert_eq!(deck.len(), 12);

        // Slot is free again afterwards.
        assert!(deck.begin_load_more());
    }

    #[test]
    fn load_more_failure_is_silent() {
        let mut deck = loaded_deck(10);
        assert!(deck.begin_load_more());
        deck.complete_load_more(Err(Error::Http("connection reset".into())));

        assert_eq!(deck.len(), 10);
        assert_eq!(deck.load_error(), None);
        assert!(!deck.is_fetching_more());
    }

    #[test]
    fn prefetch_fires_exactly_at_the_threshold() {
        let mut deck = loaded_deck(10);
        // Indices 0..=3 are more than PREFETCH_AT cards from the end.
        for expected in [false, false, false, false] {
            assert_eq!(deck.should_prefetch(), expected, "index {:?}", deck.current_index());
            deck.advance();
        }
        // Index 4 == 10 - 6: the condition fires.
        assert_eq!(deck.current_index(), Some(4));
        assert!(deck.should_prefetch());
    }

    #[test]
    fn prefetch_is_suppressed_while_fetching() {
        let mut deck = loaded_deck(6);
        assert!(deck.should_prefetch());
        assert!(deck.begin_load_more());
        assert!(!deck.should_prefetch());

        deck.complete_load_more(Ok(cards(6)));
        // Level-triggered: re-evaluated after the length change, currently
        // index 0 of 12 cards, well before the threshold.
        assert!(!deck.should_prefetch());
    }

    #[test]
    fn prefetch_requires_a_nonempty_list() {
        let deck = CardDeck::new();
        assert!(!deck.should_prefetch());
    }

    #[test]
    fn short_list_prefetches_from_the_start() {
        let deck = loaded_deck(3);
        assert!(deck.should_prefetch());
    }

    #[test]
    fn ten_card_walkthrough() {
        // List of 10 cards, cursor at 4: five advances yield 5,6,7,8,9 and a
        // sixth saturates at 9. Prefetch has already fired at index 4.
        let mut deck = loaded_deck(10);
        for _ in 0..4 {
            deck.advance();
        }
        assert_eq!(deck.current_index(), Some(4));
        assert!(deck.should_prefetch());
        assert!(deck.begin_load_more());

        let mut seen = Vec::new();
        for _ in 0..6 {
            deck.advance();
            seen.push(deck.current_index().unwrap());
        }
        assert_eq!(seen, vec![5, 6, 7, 8, 9, 9]);
    }

    #[test]
    fn peek_looks_ahead_from_the_cursor() {
        let mut deck = loaded_deck(4);
        deck.advance();
        assert_eq!(deck.peek(0).map(|c| c.id), Some(1));
        assert_eq!(deck.peek(2).map(|c| c.id), Some(3));
        assert_eq!(deck.peek(3), None);
    }
}
