//! Swipe-driven paginated carousel for flipsnap
//!
//! A [`Carousel`] snaps a horizontal strip of items to discrete points.
//! Hosts feed it pointer events and implement the element traits in
//! [`host`]; the carousel answers with style writes and notifications.

mod carousel;
mod env;
mod error;
mod events;
pub mod host;
mod marquee;
mod motion;
mod options;

pub use carousel::Carousel;
pub use env::CarouselEnv;
pub use error::CarouselError;
pub use events::{CarouselEvent, PointMoveDetail, TouchEndDetail};
pub use host::{
    CarouselElement, ClonePlacement, ElementResolver, EventTarget, ItemTree, LayoutMetrics,
    ListenerKind, Target,
};
pub use marquee::MarqueeRing;
pub use motion::MotionEngine;
pub use options::{CarouselOptions, DEFAULT_TRANSITION_DURATION_MILLIS};

pub use flipsnap_foundation::{
    Capabilities, ClickEvent, PointerEvent, PointerEventKind, PointerSource, PointerTarget,
    StyleDeclaration, StyleSink, SwipeDirection, SwipePhase,
};

pub mod prelude {
    pub use crate::carousel::Carousel;
    pub use crate::env::CarouselEnv;
    pub use crate::error::CarouselError;
    pub use crate::events::{CarouselEvent, PointMoveDetail, TouchEndDetail};
    pub use crate::host::*;
    pub use crate::options::CarouselOptions;
}
