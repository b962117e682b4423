//! Shared gesture constants for swipe recognition.
//!
//! Values are in CSS pixels and degrees.

/// Distance a pointer must travel from the press position before the
/// gesture is classified. At or below this the session stays pressed.
pub const DISTANCE_THRESHOLD: f32 = 5.0;

/// Minimum angle from the vertical axis, in degrees, for a drag to count as
/// a horizontal swipe. Anything steeper is handed back to native scrolling.
pub const ANGLE_THRESHOLD_DEGREES: f32 = 55.0;

/// Drags past the first or last point move by `delta / RUBBER_BAND_DIVISOR`.
pub const RUBBER_BAND_DIVISOR: f32 = 3.0;

/// How long click interception stays armed after a swipe ends. Some
/// platforms synthesize a click right after the release.
pub const CLICK_SUPPRESSION_MILLIS: u64 = 200;
