// SPDX-License-Identifier: MPL-2.0
//! Timed transitions between a gesture outcome and its feed mutation.
//!
//! A classified gesture does not mutate the deck directly. It starts a
//! [`Transition`] that animates the card off screen (or back to rest), and
//! only when the transition settles does the feed apply the corresponding
//! [`Commit`] — advance, retreat, or open the detail view — and reset the
//! driving values instantly so the next card starts centered.
//!
//! Per card slot the lifecycle is `idle → dragging → animating commit or
//! snap-back → idle`. Only one transition is ever in flight: the feed ignores
//! new gesture input while one is running, and the synchronous reset on
//! settle means the next gesture always starts from rest.
//!
//! The animator is pure over [`Instant`]s — callers pass the clock in — so
//! timing and easing are testable without running an event loop.

use crate::ui::gesture::GestureOutcome;
use std::time::{Duration, Instant};

/// Fraction of the viewport height a committed vertical swipe travels.
pub const COMMIT_TRAVEL_FACTOR: f32 = 0.4;

/// Duration of a committed vertical swipe.
pub const VERTICAL_COMMIT_DURATION: Duration = Duration::from_millis(200);

/// Duration of a vertical snap back to rest.
pub const VERTICAL_SNAPBACK_DURATION: Duration = Duration::from_millis(250);

/// Duration of a committed horizontal fade-out.
pub const FADE_COMMIT_DURATION: Duration = Duration::from_millis(150);

/// Duration of a horizontal fade back to full opacity.
pub const FADE_SNAPBACK_DURATION: Duration = Duration::from_millis(200);

/// Deck mutation to apply when a transition settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Advance,
    Retreat,
    OpenDetail,
}

/// Which visual value the transition drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Offset,
    Opacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Easing {
    OutCubic,
    Linear,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::OutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::Linear => t,
        }
    }
}

/// Card offset and opacity at one instant of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset: f32,
    pub opacity: f32,
}

impl Frame {
    /// The at-rest frame: centered, fully opaque.
    pub const REST: Frame = Frame {
        offset: 0.0,
        opacity: 1.0,
    };
}

/// One in-flight animated transition.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    outcome: GestureOutcome,
    channel: Channel,
    easing: Easing,
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Starts the transition for a classified gesture outcome.
    ///
    /// `from` is the frame the drag feedback left the card at, so the
    /// animation continues from under the finger instead of jumping.
    /// `viewport_height` scales the vertical commit travel.
    #[must_use]
    pub fn start(outcome: GestureOutcome, viewport_height: f32, from: Frame, now: Instant) -> Self {
        let (channel, easing, start, target, duration) = match outcome {
            GestureOutcome::Advance => (
                Channel::Offset,
                Easing::OutCubic,
                from.offset,
                -viewport_height * COMMIT_TRAVEL_FACTOR,
                VERTICAL_COMMIT_DURATION,
            ),
            GestureOutcome::Retreat => (
                Channel::Offset,
                Easing::OutCubic,
                from.offset,
                viewport_height * COMMIT_TRAVEL_FACTOR,
                VERTICAL_COMMIT_DURATION,
            ),
            GestureOutcome::SnapBackVertical => (
                Channel::Offset,
                Easing::OutCubic,
                from.offset,
                0.0,
                VERTICAL_SNAPBACK_DURATION,
            ),
            GestureOutcome::OpenDetail => (
                Channel::Opacity,
                Easing::Linear,
                from.opacity,
                0.0,
                FADE_COMMIT_DURATION,
            ),
            GestureOutcome::RetreatFade => (
                Channel::Opacity,
                Easing::Linear,
                from.opacity,
                0.0,
                FADE_COMMIT_DURATION,
            ),
            GestureOutcome::SnapBackHorizontal => (
                Channel::Opacity,
                Easing::Linear,
                from.opacity,
                1.0,
                FADE_SNAPBACK_DURATION,
            ),
        };

        Self {
            outcome,
            channel,
            easing,
            from: start,
            to: target,
            started_at: now,
            duration,
        }
    }

    /// Whether the transition has reached its target.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= self.duration
    }

    /// Samples the card frame at `now`, clamped to the target once settled.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame {
        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        let value = self.from + (self.to - self.from) * self.easing.apply(t);

        match self.channel {
            Channel::Offset => Frame {
                offset: value,
                opacity: 1.0,
            },
            Channel::Opacity => Frame {
                offset: 0.0,
                opacity: value,
            },
        }
    }

    /// The deck mutation to apply once settled; `None` for snap-backs.
    #[must_use]
    pub fn commit(&self) -> Option<Commit> {
        match self.outcome {
            GestureOutcome::Advance => Some(Commit::Advance),
            GestureOutcome::Retreat | GestureOutcome::RetreatFade => Some(Commit::Retreat),
            GestureOutcome::OpenDetail => Some(Commit::OpenDetail),
            GestureOutcome::SnapBackVertical | GestureOutcome::SnapBackHorizontal => None,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> GestureOutcome {
        self.outcome
    }
}
