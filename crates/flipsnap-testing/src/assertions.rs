//! Assertion helpers for carousel tests.

use flipsnap_ui::CarouselEvent;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Event type names in dispatch order.
pub fn event_types(events: &[CarouselEvent]) -> Vec<&'static str> {
    events.iter().map(CarouselEvent::event_type).collect()
}

/// Assert the exact sequence of dispatched event types.
pub fn assert_event_types(events: &[CarouselEvent], expected: &[&str], msg: &str) {
    let actual = event_types(events);
    assert_eq!(actual, expected, "{msg}: unexpected event sequence");
}
