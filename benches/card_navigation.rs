// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the feed core.
//!
//! Measures the performance of:
//! - Gesture classification (update + finish)
//! - Deck navigation and page appends
//! - Transition sampling (runs once per animation frame)

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use unrot::quiz::{CardDeck, QuizCard};
use unrot::ui::gesture::{GestureInterpreter, GestureOutcome};
use unrot::ui::transition::{Frame, Transition};

fn sample_cards(n: usize) -> Vec<QuizCard> {
    (0..n)
        .map(|i| QuizCard {
            id: i as i64,
            topic: "Technology".to_string(),
            question: format!("Benchmark question {i}?"),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: 0,
            explanation: String::new(),
            source_name: String::new(),
            source_url: String::new(),
            image_url: None,
        })
        .collect()
}

fn loaded_deck(n: usize) -> CardDeck {
    let mut deck = CardDeck::new();
    let generation = deck.begin_initial_load();
    deck.complete_initial_load(generation, Ok(sample_cards(n)));
    deck
}

/// Benchmark a full gesture: begin, a stream of updates, classification.
fn bench_gesture_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_navigation");

    group.bench_function("gesture_swipe_up", |b| {
        let mut gesture = GestureInterpreter::new();
        b.iter(|| {
            gesture.begin();
            for step in 1..=20 {
                let dy = -6.0 * step as f32;
                gesture.update(1.5, dy);
            }
            black_box(gesture.finish());
        });
    });

    group.bench_function("gesture_sub_threshold_tap", |b| {
        let mut gesture = GestureInterpreter::new();
        b.iter(|| {
            gesture.begin();
            gesture.update(2.0, 3.0);
            black_box(gesture.finish());
        });
    });

    group.finish();
}

/// Benchmark deck operations: advancing, the prefetch check, appends.
fn bench_deck_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_navigation");

    group.bench_function("advance_and_prefetch_check", |b| {
        let mut deck = loaded_deck(500);
        b.iter(|| {
            // Saturates at the end; advance stays O(1) either way.
            deck.advance();
            black_box(deck.should_prefetch());
            black_box(deck.current_index());
        });
    });

    group.bench_function("append_page_with_renumbering", |b| {
        let page = sample_cards(10);
        b.iter(|| {
            let mut deck = loaded_deck(100);
            assert!(deck.begin_load_more());
            deck.complete_load_more(Ok(page.clone()));
            black_box(deck.len());
        });
    });

    group.finish();
}

/// Benchmark transition sampling at animation-frame granularity.
fn bench_transition_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_navigation");

    let start = Instant::now();
    let transition = Transition::start(GestureOutcome::Advance, 780.0, Frame::REST, start);

    group.bench_function("transition_sample", |b| {
        let mut millis = 0u64;
        b.iter(|| {
            millis = (millis + 16) % 200;
            let now = start + Duration::from_millis(millis);
            black_box(transition.sample(now));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gesture_classification,
    bench_deck_operations,
    bench_transition_sampling
);
criterion_main!(benches);
