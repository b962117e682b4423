use flipsnap_foundation::SwipeDirection;

/// Payload of `fstouchend`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchEndDetail {
    pub moved: bool,
    pub original_point: i32,
    pub new_point: i32,
    pub cancelled: bool,
}

/// Payload of `fspointmove` and its deprecated alias `fsmoveend`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointMoveDetail {
    pub original_point: i32,
    pub new_point: i32,
}

/// Notifications dispatched on the container element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    TouchStart,
    /// Cancelable. Vetoing it aborts the current swipe.
    TouchMove {
        delta: f32,
        direction: SwipeDirection,
    },
    TouchEnd(TouchEndDetail),
    PointMove(PointMoveDetail),
    /// Deprecated alias of `PointMove`, dispatched right before it.
    MoveEnd(PointMoveDetail),
}

impl CarouselEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            CarouselEvent::TouchStart => "fstouchstart",
            CarouselEvent::TouchMove { .. } => "fstouchmove",
            CarouselEvent::TouchEnd(_) => "fstouchend",
            CarouselEvent::PointMove(_) => "fspointmove",
            CarouselEvent::MoveEnd(_) => "fsmoveend",
        }
    }

    pub fn bubbles(&self) -> bool {
        true
    }

    pub fn cancelable(&self) -> bool {
        matches!(self, CarouselEvent::TouchMove { .. })
    }
}
