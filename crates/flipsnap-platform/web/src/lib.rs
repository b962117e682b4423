//! Browser host for flipsnap carousels.
//!
//! [`WebElement`] implements the carousel's host traits on a DOM element,
//! [`WebTimers`] maps timers onto `setTimeout`/`setInterval`, and
//! [`WebCarousel`] wires DOM listeners to a carousel.

mod carousel;
mod document;
mod element;
mod error;
mod timers;

pub use carousel::{install_gesture_listeners, WebCarousel};
pub use document::{WebDocument, WebFeatureProbe};
pub use element::{HostInput, WebElement};
pub use error::WebError;
pub use timers::WebTimers;

use flipsnap_foundation::{PointerEvent, PointerEventKind, PointerSource, PointerTarget};
use flipsnap_ui_graphics::Point;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

/// Tags whose default mouse-down behaviour is kept.
const FORM_CONTROL_TAGS: [&str; 4] = ["SELECT", "INPUT", "TEXTAREA", "BUTTON"];

/// Converts DOM input into pointer events.
pub struct WebPlatform;

impl WebPlatform {
    pub fn pointer_position(x: i32, y: i32) -> Point {
        // page coordinates are already CSS pixels
        Point::new(x as f32, y as f32)
    }

    /// First changed touch of a touch event. `None` when the list is empty.
    pub fn pointer_from_touch(kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
        let touch = event.changed_touches().get(0)?;
        let page = Self::pointer_position(touch.page_x(), touch.page_y());
        Some(
            PointerEvent::new(kind, PointerSource::Touch, page, event.time_stamp() as u64)
                .with_target(Self::pointer_target(event)),
        )
    }

    pub fn pointer_from_mouse(kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        let page = Self::pointer_position(event.page_x(), event.page_y());
        PointerEvent::new(kind, PointerSource::Mouse, page, event.time_stamp() as u64)
            .with_target(Self::pointer_target(event))
    }

    fn pointer_target(event: &Event) -> PointerTarget {
        let tag = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.tag_name().to_ascii_uppercase());
        match tag {
            Some(tag) if FORM_CONTROL_TAGS.contains(&tag.as_str()) => PointerTarget::FormControl,
            _ => PointerTarget::Content,
        }
    }
}
