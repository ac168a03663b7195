// SPDX-License-Identifier: MPL-2.0
//! Wire types for the backend API.

use crate::quiz::QuizCard;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
    pub gemini_api_key: String,
}

/// Successful registration response; the token authenticates quiz fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub name: String,
    pub email: String,
}

/// One page of quiz cards from `GET /api/quiz`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizResponse {
    pub cards: Vec<QuizCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_serializes_snake_case() {
        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            interests: vec!["Science".to_string()],
            gemini_api_key: "AIzaSyExample".to_string(),
        };

        let json = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(json["gemini_api_key"], "AIzaSyExample");
        assert_eq!(json["interests"][0], "Science");
    }

    #[test]
    fn quiz_response_deserializes_cards() {
        let json = r#"{
            "cards": [{
                "id": 0,
                "topic": "Economy",
                "question": "What rose?",
                "options": ["Rates", "Tides", "Bread", "Kites"],
                "correct_answer": 0,
                "explanation": "Central bank raised rates.",
                "source_name": "Example News",
                "source_url": "https://example.com",
                "image_url": null
            }]
        }"#;

        let response: QuizResponse = serde_json::from_str(json).expect("should parse");
        assert_eq!(response.cards.len(), 1);
        assert_eq!(response.cards[0].topic, "Economy");
    }
}
