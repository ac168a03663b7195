// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced anywhere in the client.
///
/// Network and parse failures are converted to state at the component
/// boundary (a visible error with retry for the initial load, a stderr line
/// for background fetches); none of them is fatal to the process.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure: connection refused, DNS, TLS, timeout.
    Http(String),
    /// The server answered with a non-success status; carries the body text.
    Api(String),
    /// Configuration file could not be read, parsed, or written.
    Config(String),
    /// Local I/O failure.
    Io(String),
    /// A payload (server JSON, detail-screen card data) failed to parse.
    Payload(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "Network error: {}", e),
            Error::Api(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Payload(e) => write!(f, "Malformed payload: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Payload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
