// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};
use tempfile::tempdir;
use unrot::config::{self, Config};
use unrot::i18n::I18n;
use unrot::quiz::{CardDeck, QuizCard};
use unrot::ui::detail;
use unrot::ui::gesture::{GestureInterpreter, GestureOutcome};
use unrot::ui::transition::{Commit, Frame, Transition};

fn sample_cards(n: usize) -> Vec<QuizCard> {
    (0..n)
        .map(|i| QuizCard {
            id: i as i64,
            topic: "Technology".to_string(),
            question: format!("Question {i}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0,
            explanation: "Because.".to_string(),
            source_name: "Example Wire".to_string(),
            source_url: "https://example.com".to_string(),
            image_url: None,
        })
        .collect()
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        server_url: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        server_url: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // The same key resolves differently under each locale.
    assert_ne!(
        i18n_en.tr("feed-retry-hint"),
        i18n_fr.tr("feed-retry-hint")
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_server_url_override_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        server_url: Some("http://localhost:8000".to_string()),
    };
    config::save_to_path(&config, &path).expect("save failed");

    let loaded = config::load_from_path(&path).expect("load failed");
    assert_eq!(loaded.server_url(), "http://localhost:8000");
}

/// Drives the full gesture → transition → deck pipeline the way the feed
/// component wires it, using explicit instants instead of the event loop.
#[test]
fn test_swipe_pipeline_advances_deck() {
    let mut deck = CardDeck::new();
    let generation = deck.begin_initial_load();
    deck.complete_initial_load(generation, Ok(sample_cards(10)));

    let mut gesture = GestureInterpreter::new();
    let start = Instant::now();

    // Swipe up past the commit threshold.
    gesture.begin();
    gesture.update(2.0, -30.0);
    gesture.update(3.0, -140.0);
    let outcome = gesture.finish().expect("swipe should classify");
    assert_eq!(outcome, GestureOutcome::Advance);

    // The deck is untouched until the transition settles.
    let transition = Transition::start(outcome, 780.0, Frame::REST, start);
    assert_eq!(deck.current_index(), Some(0));

    let settle_time = start + Duration::from_millis(200);
    assert!(transition.is_settled(settle_time));
    match transition.commit() {
        Some(Commit::Advance) => deck.advance(),
        other => panic!("expected advance commit, got {other:?}"),
    }

    assert_eq!(deck.current_index(), Some(1));
}

/// A full session walk: initial load, prefetch trigger, background append,
/// swiping to the end of the list.
#[test]
fn test_feed_session_walkthrough() {
    let mut deck = CardDeck::new();
    let generation = deck.begin_initial_load();
    deck.complete_initial_load(generation, Ok(sample_cards(10)));

    // Walk forward until the prefetch condition fires (index 4 of 10).
    let mut fired_at = None;
    for _ in 0..5 {
        if deck.should_prefetch() {
            fired_at = deck.current_index();
            break;
        }
        deck.advance();
    }
    assert_eq!(fired_at, Some(4));

    // Single-flight: claim the slot, further triggers collapse.
    assert!(deck.begin_load_more());
    assert!(!deck.begin_load_more());

    // The background page lands with server ids 0..5; they are renumbered.
    deck.complete_load_more(Ok(sample_cards(5)));
    assert_eq!(deck.len(), 15);
    let appended_ids: Vec<i64> = deck.cards()[10..].iter().map(|c| c.id).collect();
    assert_eq!(appended_ids, vec![10, 11, 12, 13, 14]);

    // Swiping far past the end saturates at the last card.
    for _ in 0..30 {
        deck.advance();
    }
    assert_eq!(deck.current_index(), Some(14));
}

#[test]
fn test_detail_payload_round_trip() {
    let cards = sample_cards(1);
    let card = &cards[0];
    let detail = detail::State::from_payload(&card.to_payload());
    assert_eq!(detail.card(), Some(card));

    let share = detail.share_text().expect("share text");
    assert!(share.contains(&card.question));
    assert!(share.contains("Answer: A"));
}

#[test]
fn test_detail_survives_garbage_payload() {
    let detail = detail::State::from_payload("][ not even close");
    assert!(detail.card().is_none());
    assert_eq!(detail.share_text(), None);
}
