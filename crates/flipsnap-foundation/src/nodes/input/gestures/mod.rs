pub mod swipe;

pub use swipe::{
    rubber_band, snap_point, EndOutcome, InteractionSession, MoveOutcome, SwipeDirection,
    SwipeGesture, SwipePhase,
};
