// SPDX-License-Identifier: MPL-2.0
//! Drag gesture interpretation for the card feed.
//!
//! A press-drag-release on the card is ambiguous until it has travelled far
//! enough to reveal intent: a vertical drag pages between cards, a horizontal
//! drag either opens the detail view (left) or retreats (right). The
//! interpreter resolves the ambiguity with an axis lock — the first axis
//! whose cumulative travel exceeds [`LOCK_THRESHOLD`] wins for the rest of
//! the gesture — and classifies the release into exactly one
//! [`GestureOutcome`].
//!
//! Until an axis is locked the gesture produces no visual feedback at all.
//! This is what keeps taps on answer options working: a press that never
//! travels more than the lock threshold is not captured and emits nothing on
//! release.
//!
//! The interpreter is a plain state machine over cumulative translations; it
//! knows nothing about pointer events or widgets, which is what makes the
//! classification rules testable without a UI harness.

/// Travel (in logical pixels) after which the gesture commits to an axis.
pub const LOCK_THRESHOLD: f32 = 10.0;

/// Travel past which a release commits instead of snapping back.
pub const SWIPE_THRESHOLD: f32 = 80.0;

/// Vertical drags move the card at this fraction of finger travel.
pub const VERTICAL_DRAG_DAMPING: f32 = 0.35;

/// Horizontal travel that produces the maximum drag fade.
pub const FADE_DISTANCE: f32 = 300.0;

/// Maximum opacity drop while dragging horizontally (fades to 0.4, no less).
pub const FADE_MAX: f32 = 0.6;

/// Axis a gesture has been locked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Visual feedback to apply while a locked drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragFeedback {
    /// Vertical offset for the card, already damped.
    Offset(f32),
    /// Card opacity in `[1 - FADE_MAX, 1]`.
    Opacity(f32),
}

/// Discrete classification of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Swipe up: go to the next card.
    Advance,
    /// Swipe down: go to the previous card.
    Retreat,
    /// Vertical drag released under the swipe threshold.
    SnapBackVertical,
    /// Swipe left: open the detail view for the current card.
    OpenDetail,
    /// Swipe right: go to the previous card (fade variant).
    RetreatFade,
    /// Horizontal drag released under the swipe threshold.
    SnapBackHorizontal,
}

/// Per-gesture session state.
///
/// Lives for one press-drag-release cycle; [`begin`](Self::begin) resets it
/// and [`finish`](Self::finish) resets it again unconditionally, so no state
/// leaks between gestures.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    locked_axis: Option<Axis>,
    translation: (f32, f32),
}

impl GestureInterpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new gesture, discarding anything left from the previous one.
    pub fn begin(&mut self) {
        self.locked_axis = None;
        self.translation = (0.0, 0.0);
    }

    /// Feeds the cumulative translation since the gesture began.
    ///
    /// Locks the axis once either component exceeds [`LOCK_THRESHOLD`]; ties
    /// resolve to vertical. Returns the visual feedback to apply, or `None`
    /// while the gesture is still unlocked.
    pub fn update(&mut self, dx: f32, dy: f32) -> Option<DragFeedback> {
        self.translation = (dx, dy);

        if self.locked_axis.is_none() {
            if dx.abs() > LOCK_THRESHOLD || dy.abs() > LOCK_THRESHOLD {
                self.locked_axis = Some(if dy.abs() >= dx.abs() {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                });
            } else {
                return None;
            }
        }

        match self.locked_axis {
            Some(Axis::Vertical) => Some(DragFeedback::Offset(dy * VERTICAL_DRAG_DAMPING)),
            Some(Axis::Horizontal) => {
                let opacity = 1.0 - (dx.abs() / FADE_DISTANCE).min(FADE_MAX);
                Some(DragFeedback::Opacity(opacity))
            }
            None => None,
        }
    }

    /// Ends the gesture and classifies it.
    ///
    /// Returns `None` when no axis was ever locked (the drag stayed under the
    /// lock threshold in both dimensions). The session is reset either way.
    pub fn finish(&mut self) -> Option<GestureOutcome> {
        let (dx, dy) = self.translation;
        let outcome = match self.locked_axis {
            Some(Axis::Vertical) => Some(if dy < -SWIPE_THRESHOLD {
                GestureOutcome::Advance
            } else if dy > SWIPE_THRESHOLD {
                GestureOutcome::Retreat
            } else {
                GestureOutcome::SnapBackVertical
            }),
            Some(Axis::Horizontal) => Some(if dx < -SWIPE_THRESHOLD {
                GestureOutcome::OpenDetail
            } else if dx > SWIPE_THRESHOLD {
                GestureOutcome::RetreatFade
            } else {
                GestureOutcome::SnapBackHorizontal
            }),
            None => None,
        };

        self.locked_axis = None;
        self.translation = (0.0, 0.0);
        outcome
    }

    /// Axis the current gesture is locked to, if any.
    #[must_use]
    pub fn locked_axis(&self) -> Option<Axis> {
        self.locked_axis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_threshold_drag_emits_nothing() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();

        assert_eq!(gesture.update(3.0, -4.0), None);
        assert_eq!(gesture.update(-9.0, 9.5), None);
        assert_eq!(gesture.update(10.0, 10.0), None); // threshold is exclusive
        assert_eq!(gesture.locked_axis(), None);
        assert_eq!(gesture.finish(), None);
    }

    #[test]
    fn vertical_lock_wins_ties() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();

        // |dy| == |dx|, both over the threshold: vertical wins.
        gesture.update(12.0, 12.0);
        assert_eq!(gesture.locked_axis(), Some(Axis::Vertical));
    }

    #[test]
    fn axis_stays_locked_for_the_rest_of_the_gesture() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();

        gesture.update(0.0, -15.0);
        assert_eq!(gesture.locked_axis(), Some(Axis::Vertical));

        // Later the horizontal component dominates, but the lock holds.
        gesture.update(-200.0, -20.0);
        assert_eq!(gesture.locked_axis(), Some(Axis::Vertical));
        assert_eq!(gesture.finish(), Some(GestureOutcome::SnapBackVertical));
    }

    #[test]
    fn lock_resets_between_gestures() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(0.0, -100.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::Advance));
        assert_eq!(gesture.locked_axis(), None);

        gesture.begin();
        gesture.update(-40.0, 2.0);
        assert_eq!(gesture.locked_axis(), Some(Axis::Horizontal));
    }

    #[test]
    fn vertical_feedback_is_damped() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();

        let feedback = gesture.update(0.0, -100.0);
        assert_eq!(feedback, Some(DragFeedback::Offset(-35.0)));
    }

    #[test]
    fn horizontal_feedback_fades_with_distance() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();

        let feedback = gesture.update(-150.0, 0.0);
        assert_eq!(feedback, Some(DragFeedback::Opacity(0.5)));

        // Fade floors at 0.4 however far the drag goes.
        let feedback = gesture.update(-900.0, 0.0);
        assert_eq!(feedback, Some(DragFeedback::Opacity(0.4)));
    }

    #[test]
    fn swipe_up_advances() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(5.0, -120.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::Advance));
    }

    #[test]
    fn swipe_down_retreats() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(-3.0, 200.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::Retreat));
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        // dy == -80 exactly: no commit, snap back.
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(0.0, -SWIPE_THRESHOLD);
        assert_eq!(gesture.finish(), Some(GestureOutcome::SnapBackVertical));

        gesture.begin();
        gesture.update(0.0, SWIPE_THRESHOLD);
        assert_eq!(gesture.finish(), Some(GestureOutcome::SnapBackVertical));

        gesture.begin();
        gesture.update(SWIPE_THRESHOLD, 2.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::SnapBackHorizontal));
    }

    #[test]
    fn swipe_left_opens_detail() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();

        // Scenario from the drag log: dx reaches -120 while dy hovers at 5.
        gesture.update(-11.0, 5.0);
        assert_eq!(gesture.locked_axis(), Some(Axis::Horizontal));
        gesture.update(-120.0, 5.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::OpenDetail));
    }

    #[test]
    fn swipe_right_retreats_with_fade() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(150.0, -8.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::RetreatFade));
    }

    #[test]
    fn short_horizontal_drag_snaps_back() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(40.0, 0.0);
        assert_eq!(gesture.finish(), Some(GestureOutcome::SnapBackHorizontal));
    }

    #[test]
    fn begin_discards_stale_session() {
        let mut gesture = GestureInterpreter::new();
        gesture.begin();
        gesture.update(0.0, -200.0);

        // A new press arrives without the previous release being classified.
        gesture.begin();
        assert_eq!(gesture.locked_axis(), None);
        assert_eq!(gesture.finish(), None);
    }
}
