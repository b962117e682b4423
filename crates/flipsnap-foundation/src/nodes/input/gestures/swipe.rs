//! Swipe gesture recogniser.
//!
//! # Gesture Flow
//! 1. **Down**: record the press position, enter `Pressed`.
//! 2. **Move** while `Pressed`: once the pointer has travelled more than
//!    `DISTANCE_THRESHOLD` from the press, classify by angle. Steeper than
//!    `ANGLE_THRESHOLD_DEGREES` from vertical is a swipe (`Swiping`),
//!    anything else is a page scroll (`Rejected`).
//! 3. **Move** while `Swiping`: report the incremental horizontal delta and
//!    the running direction.
//! 4. **Up**: report whether the session ever became a swipe.
//!
//! The recogniser only classifies. Offsets, snapping and notifications
//! belong to the carousel that owns it.

use crate::gesture_constants::{ANGLE_THRESHOLD_DEGREES, DISTANCE_THRESHOLD, RUBBER_BAND_DIVISOR};
use crate::nodes::input::types::{PointerEvent, PointerSource};
use flipsnap_ui_graphics::{Point, TriangleSide};

/// Direction of travel through the point sequence.
///
/// A finger moving left (negative page delta) advances toward higher
/// points, hence `Forward`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Backward,
    #[default]
    None,
    Forward,
}

impl SwipeDirection {
    /// Direction implied by a horizontal page delta. A zero delta keeps the
    /// previous direction: some platforms emit a final zero-delta move right
    /// before the release.
    pub fn from_delta(delta_x: f32, previous: Self) -> Self {
        if delta_x == 0.0 {
            previous
        } else if delta_x > 0.0 {
            SwipeDirection::Backward
        } else {
            SwipeDirection::Forward
        }
    }

    pub fn signum(self) -> i32 {
        match self {
            SwipeDirection::Backward => -1,
            SwipeDirection::None => 0,
            SwipeDirection::Forward => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipePhase {
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to classify.
    Pressed,
    /// Confirmed horizontal swipe; the carousel tracks the pointer.
    Swiping,
    /// Classified as a vertical scroll; left to the platform.
    Rejected,
    /// A drag step was vetoed; waiting for the release.
    Cancelled,
}

impl SwipePhase {
    /// True while the session may still move the carousel.
    pub fn is_tracking(self) -> bool {
        matches!(self, SwipePhase::Pressed | SwipePhase::Swiping)
    }
}

/// State for one pointer session, from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionSession {
    pub source: PointerSource,
    pub start: Point,
    pub last: Point,
    pub start_time_millis: u64,
    pub direction: SwipeDirection,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No tracking session, or the event belongs to another device.
    Ignored,
    /// Still within the distance threshold.
    Pending,
    /// Just classified as a horizontal swipe.
    Confirmed,
    /// Just classified as a vertical scroll.
    Rejected,
    /// Incremental drag while swiping.
    Dragged {
        delta_x: f32,
        direction: SwipeDirection,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// There was no session.
    Ignored,
    /// The session ended without ever swiping (or after a veto).
    Abandoned { source: PointerSource },
    /// A confirmed swipe was released.
    Released {
        source: PointerSource,
        direction: SwipeDirection,
    },
}

#[derive(Clone, Debug, Default)]
pub struct SwipeGesture {
    phase: SwipePhase,
    session: Option<InteractionSession>,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Start a session. Refused while another session is still tracking.
    pub fn on_down(&mut self, event: &PointerEvent) -> bool {
        if self.phase.is_tracking() {
            return false;
        }
        self.phase = SwipePhase::Pressed;
        self.session = Some(InteractionSession {
            source: event.source,
            start: event.page,
            last: event.page,
            start_time_millis: event.timestamp_millis,
            direction: SwipeDirection::None,
        });
        true
    }

    pub fn on_move(&mut self, event: &PointerEvent) -> MoveOutcome {
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Ignored;
        };
        if session.source != event.source {
            return MoveOutcome::Ignored;
        }

        match self.phase {
            SwipePhase::Pressed => {
                let triangle = TriangleSide::between(session.start, event.page);
                let outcome = if triangle.distance() > DISTANCE_THRESHOLD {
                    if triangle.angle_from_vertical() > ANGLE_THRESHOLD_DEGREES {
                        self.phase = SwipePhase::Swiping;
                        MoveOutcome::Confirmed
                    } else {
                        self.phase = SwipePhase::Rejected;
                        MoveOutcome::Rejected
                    }
                } else {
                    MoveOutcome::Pending
                };
                session.last = event.page;
                outcome
            }
            SwipePhase::Swiping => {
                let delta_x = event.page.x - session.last.x;
                session.direction = SwipeDirection::from_delta(delta_x, session.direction);
                session.last = event.page;
                MoveOutcome::Dragged {
                    delta_x,
                    direction: session.direction,
                }
            }
            SwipePhase::Idle | SwipePhase::Rejected | SwipePhase::Cancelled => {
                MoveOutcome::Ignored
            }
        }
    }

    /// Finish the session and return to `Idle`.
    pub fn on_up(&mut self) -> EndOutcome {
        let phase = std::mem::take(&mut self.phase);
        let Some(session) = self.session.take() else {
            return EndOutcome::Ignored;
        };
        match phase {
            SwipePhase::Swiping => EndOutcome::Released {
                source: session.source,
                direction: session.direction,
            },
            _ => EndOutcome::Abandoned {
                source: session.source,
            },
        }
    }

    /// Stop treating the session as moving; the release is still consumed
    /// by `on_up`.
    pub fn cancel(&mut self) {
        if self.phase.is_tracking() {
            self.phase = SwipePhase::Cancelled;
        }
    }

    /// Drop the session entirely.
    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
        self.session = None;
    }
}

/// `Math.round` semantics: halves round toward positive infinity.
fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Offset after applying `delta_x`, damped to a third outside
/// `[min_x, max_x]`.
pub fn rubber_band(current_x: f32, delta_x: f32, min_x: f32, max_x: f32) -> f32 {
    let new_x = current_x + delta_x;
    if new_x > max_x || new_x < min_x {
        round_half_up(current_x + delta_x / RUBBER_BAND_DIVISOR)
    } else {
        new_x
    }
}

/// Round a fractional point toward the direction of travel.
pub fn snap_point(raw: f32, direction: SwipeDirection) -> i32 {
    if !raw.is_finite() {
        return 0;
    }
    // Values within float noise of an integer are that integer, so a drag
    // that lands exactly on a point does not skip to the next one.
    let nearest = round_half_up(raw);
    if (raw - nearest).abs() < 1e-4 {
        return nearest as i32;
    }
    let snapped = match direction {
        SwipeDirection::Forward => raw.ceil(),
        SwipeDirection::Backward => raw.floor(),
        SwipeDirection::None => nearest,
    };
    snapped as i32
}

#[cfg(test)]
#[path = "../../../tests/swipe_tests.rs"]
mod tests;
