// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::AuthResponse;
use crate::error::Error;
use crate::ui::{detail, feed, onboarding};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Onboarding(onboarding::Message),
    Feed(feed::Message),
    Detail(detail::Message),
    /// Result of the registration request issued at the end of onboarding.
    RegisterCompleted(Result<AuthResponse, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL override (wins over the config file).
    pub server: Option<String>,
}
