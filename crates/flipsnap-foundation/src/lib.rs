//! Foundation layer for flipsnap: pointer input types, the swipe gesture
//! recogniser, and the capability shims that describe what the host
//! platform can render.

pub mod capability;
pub mod gesture_constants;
pub mod nodes;

pub use capability::{
    Capabilities, FeatureProbe, StyleDeclaration, StyleFeature, StyleSink, Translate,
};
pub use gesture_constants::*;
pub use nodes::input::gestures::{
    rubber_band, snap_point, EndOutcome, InteractionSession, MoveOutcome, SwipeDirection,
    SwipeGesture, SwipePhase,
};
pub use nodes::input::{
    ClickEvent, InputRouter, PlatformGestureFlag, PointerEvent, PointerEventKind, PointerSource,
    PointerTarget,
};

pub mod prelude {
    pub use crate::capability::{Capabilities, StyleDeclaration, StyleSink};
    pub use crate::nodes::input::gestures::{SwipeDirection, SwipeGesture, SwipePhase};
    pub use crate::nodes::input::prelude::*;
}
