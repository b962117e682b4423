use flipsnap_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Input device family. Touch and mouse sessions use separate listener
/// sets on the host element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Touch,
    Mouse,
}

/// What the pointer was pressed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerTarget {
    #[default]
    Content,
    /// `select`, `input`, `textarea` or `button`: keeps its default action.
    FormControl,
}

/// Pointer sample delivered by the host.
///
/// `consume()` is the platform's "prevent default": once a swipe is
/// confirmed the carousel consumes moves so the page does not scroll.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub source: PointerSource,
    /// Page coordinates of the (first changed) pointer.
    pub page: Point,
    pub timestamp_millis: u64,
    pub target: PointerTarget,
    /// Shared via Rc<Cell> so consumption is visible through copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        source: PointerSource,
        page: Point,
        timestamp_millis: u64,
    ) -> Self {
        Self {
            kind,
            source,
            page,
            timestamp_millis,
            target: PointerTarget::Content,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn touch(kind: PointerEventKind, x: f32, y: f32, timestamp_millis: u64) -> Self {
        Self::new(kind, PointerSource::Touch, Point::new(x, y), timestamp_millis)
    }

    pub fn mouse(kind: PointerEventKind, x: f32, y: f32, timestamp_millis: u64) -> Self {
        Self::new(kind, PointerSource::Mouse, Point::new(x, y), timestamp_millis)
    }

    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }

    /// Prevent the platform's default handling of this event.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Click delivered to the capture-phase click listener.
#[derive(Clone, Debug, Default)]
pub struct ClickEvent {
    default_prevented: Rc<Cell<bool>>,
    propagation_stopped: Rc<Cell<bool>>,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}
