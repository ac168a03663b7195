// SPDX-License-Identifier: MPL-2.0
use crate::api::types::{AuthResponse, QuizResponse, RegisterRequest};
use crate::error::{Error, Result};
use crate::quiz::QuizCard;

/// HTTP client for the Unrot backend.
///
/// Cheap to clone (the underlying `reqwest::Client` is reference-counted),
/// so async tasks can take their own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Registers a new user and returns their session token.
    ///
    /// Registering an already-known email is not an error: the backend
    /// answers with the existing account's token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure, [`Error::Api`] with the
    /// response body on a non-success status, and [`Error::Payload`] if the
    /// body does not decode.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let url = format!("{}/api/auth/register", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("Registration failed: {body}")));
        }

        let auth = response.json::<AuthResponse>().await.map_err(decode_error)?;
        Ok(auth)
    }

    /// Fetches one page of quiz cards for the session token.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`register`](Self::register); the non-success message
    /// reads `Quiz fetch failed: …`.
    pub async fn fetch_quiz(&self, token: &str) -> Result<Vec<QuizCard>> {
        let url = format!("{}/api/quiz", self.base_url);
        let response = self.http.get(&url).query(&[("token", token)]).send().await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("Quiz fetch failed: {body}")));
        }

        let quiz = response.json::<QuizResponse>().await.map_err(decode_error)?;
        Ok(quiz.cards)
    }

    /// Downloads a card's background image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on transport failure or [`Error::Api`] on a
    /// non-success status.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "Image fetch failed with status {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// A success status with an undecodable body is a payload error, not a
/// transport one.
fn decode_error(err: reqwest::Error) -> Error {
    Error::Payload(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = ApiClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn clean_base_url_is_kept_verbatim() {
        let client = ApiClient::new("https://unrot.onrender.com");
        assert_eq!(client.base_url(), "https://unrot.onrender.com");
    }
}
