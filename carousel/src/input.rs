//! Gesture classification: press, drag and click disambiguation.
//!
//! DESIGN
//! ======
//! A press arms the classifier. Movement below the drag threshold is ignored,
//! so a release from `Armed` is an ordinary click. Once the pointer has
//! travelled `drag_threshold_px` from where it went down, the session becomes
//! a drag and every later move is handed to the layout strategy.
//!
//! Releasing a drag leaves the classifier in `Released { suppress_click: true }`.
//! That state is the one-shot signal: the next click consumes it and is
//! reported as suppressed, and a new press discards it. A click therefore
//! reaches navigation only when the gesture just before it never crossed the
//! threshold.
//!
//! Moves during a drag are coalesced. Only the latest pointer position is kept
//! until the engine flushes it at the next frame boundary.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::pointer::Point;

/// Coarse phase of the current gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    Idle,
    Armed,
    Dragging,
    Released,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No press seen since the last click was consumed.
    #[default]
    Idle,
    /// Pointer is down but has not travelled past the threshold.
    Armed {
        /// Where the pointer went down.
        start: Point,
        /// Whether any move arrived, even below the threshold.
        moved: bool,
    },
    /// Pointer crossed the threshold; moves drive the layout.
    Dragging {
        /// Where the pointer went down.
        start: Point,
        /// Latest move not yet applied to the layout.
        pending: Option<Point>,
    },
    /// Pointer went up. Carries the one-shot click suppression signal.
    Released {
        /// Whether the next click must be swallowed.
        suppress_click: bool,
    },
}

/// Outcome of a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No press in progress, or still below the threshold.
    Ignored,
    /// This move crossed the threshold.
    DragStarted { start: Point },
    /// An ongoing drag recorded a new pending position.
    Dragged,
}

/// Outcome of a pointer release or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// No press was in progress.
    Ignored,
    /// The press never became a drag.
    Click,
    /// A drag ended; `pending` is the last unapplied move, if any.
    DragEnded { pending: Option<Point> },
}

/// Whether a click may reach navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickDecision {
    Allowed,
    Suppressed,
}

/// Distance-threshold gesture state machine.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    state: GestureState,
    threshold_px: f64,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { state: GestureState::Idle, threshold_px: threshold_px.max(0.0) }
    }

    /// The raw state, for inspection.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Armed { .. } => GesturePhase::Armed,
            GestureState::Dragging { .. } => GesturePhase::Dragging,
            GestureState::Released { .. } => GesturePhase::Released,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Whether a press is in progress (armed or dragging).
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, GestureState::Armed { .. } | GestureState::Dragging { .. })
    }

    /// Whether the next click would be suppressed.
    #[must_use]
    pub fn suppresses_next_click(&self) -> bool {
        matches!(self.state, GestureState::Released { suppress_click: true })
    }

    /// Start a session. Any unconsumed suppression from the previous session is dropped.
    pub fn press(&mut self, at: Point) {
        self.state = GestureState::Armed { start: at, moved: false };
    }

    pub fn on_move(&mut self, at: Point) -> MoveOutcome {
        match &mut self.state {
            GestureState::Armed { start, moved } => {
                *moved = true;
                if start.distance(at) < self.threshold_px {
                    return MoveOutcome::Ignored;
                }
                let start = *start;
                self.state = GestureState::Dragging { start, pending: Some(at) };
                MoveOutcome::DragStarted { start }
            }
            GestureState::Dragging { pending, .. } => {
                *pending = Some(at);
                MoveOutcome::Dragged
            }
            GestureState::Idle | GestureState::Released { .. } => MoveOutcome::Ignored,
        }
    }

    /// Take the latest unapplied drag position. Earlier moves are already gone.
    pub fn take_pending(&mut self) -> Option<Point> {
        match &mut self.state {
            GestureState::Dragging { pending, .. } => pending.take(),
            _ => None,
        }
    }

    /// End the session on pointer-up or cancel.
    pub fn release(&mut self) -> ReleaseOutcome {
        match std::mem::take(&mut self.state) {
            GestureState::Armed { .. } => {
                self.state = GestureState::Released { suppress_click: false };
                ReleaseOutcome::Click
            }
            GestureState::Dragging { pending, .. } => {
                self.state = GestureState::Released { suppress_click: true };
                ReleaseOutcome::DragEnded { pending }
            }
            other => {
                self.state = other;
                ReleaseOutcome::Ignored
            }
        }
    }

    /// Classify a click event, consuming the one-shot suppression signal.
    pub fn click(&mut self) -> ClickDecision {
        match self.state {
            GestureState::Released { suppress_click } => {
                self.state = GestureState::Idle;
                if suppress_click { ClickDecision::Suppressed } else { ClickDecision::Allowed }
            }
            // A click that arrives mid-press belongs to no finished gesture.
            GestureState::Dragging { .. } => ClickDecision::Suppressed,
            GestureState::Idle | GestureState::Armed { .. } => ClickDecision::Allowed,
        }
    }
}
