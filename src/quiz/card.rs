// SPDX-License-Identifier: MPL-2.0
//! Quiz card data model.
//!
//! A [`QuizCard`] is the unit of content in the feed: one AI-generated
//! multiple-choice question derived from a news article. Cards are immutable
//! once received from the server; the only field the client ever rewrites is
//! `id`, which the deck renumbers when appending a fetched page so ids stay
//! unique and contiguous across the accumulated list.

use serde::{Deserialize, Serialize};

/// Number of answer options every card carries.
pub const OPTION_COUNT: usize = 4;

/// One quiz question with its answer options and source attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizCard {
    pub id: i64,
    pub topic: String,
    pub question: String,
    /// Exactly four answer choices, in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct choice.
    pub correct_answer: usize,
    /// Why the answer is correct. The server may omit it.
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub source_url: String,
    /// Optional article image used as the card background.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl QuizCard {
    /// Returns the text of the correct answer, if `correct_answer` is in range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    /// Checks whether the card carries a non-empty background image URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Serializes the full card as the string payload handed to the detail
    /// screen. The detail side parses it defensively; see
    /// [`crate::ui::detail`].
    #[must_use]
    pub fn to_payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card(id: i64) -> QuizCard {
        QuizCard {
            id,
            topic: "Technology".to_string(),
            question: "What changed?".to_string(),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            correct_answer: 1,
            explanation: "Because B.".to_string(),
            source_name: "Example Wire".to_string(),
            source_url: "https://example.com/article".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn deserializes_server_card_with_null_optional_fields() {
        let json = r#"{
            "id": 3,
            "topic": "Climate",
            "question": "Which treaty was extended?",
            "options": ["Kyoto", "Paris", "Montreal", "Basel"],
            "correct_answer": 2,
            "image_url": null
        }"#;

        let card: QuizCard = serde_json::from_str(json).expect("card should parse");
        assert_eq!(card.id, 3);
        assert_eq!(card.correct_answer, 2);
        assert_eq!(card.explanation, "");
        assert_eq!(card.source_name, "");
        assert_eq!(card.image_url, None);
        assert!(!card.has_image());
    }

    #[test]
    fn correct_option_resolves_index() {
        let card = sample_card(0);
        assert_eq!(card.correct_option(), Some("Option B"));
    }

    #[test]
    fn correct_option_out_of_range_is_none() {
        let mut card = sample_card(0);
        card.correct_answer = 9;
        assert_eq!(card.correct_option(), None);
    }

    #[test]
    fn payload_round_trips_through_json() {
        let card = sample_card(7);
        let payload = card.to_payload();
        let parsed: QuizCard = serde_json::from_str(&payload).expect("payload should parse");
        assert_eq!(parsed, card);
    }

    #[test]
    fn empty_image_url_is_not_an_image() {
        let mut card = sample_card(0);
        card.image_url = Some(String::new());
        assert!(!card.has_image());

        card.image_url = Some("https://example.com/img.jpg".to_string());
        assert!(card.has_image());
    }
}
