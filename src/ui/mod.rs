// SPDX-License-Identifier: MPL-2.0
//! User interface: screens, shared components, styles and the gesture /
//! transition machinery behind the feed.

pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod feed;
pub mod gesture;
pub mod onboarding;
pub mod styles;
pub mod transition;
pub mod widgets;
