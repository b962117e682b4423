//! Process-wide pointer routing.
//!
//! The router owns the "platform gesture in progress" flag (set while the
//! OS is running a multi-finger gesture such as pinch-zoom) and hands each
//! carousel a read handle to it. Hosts may also queue pointer events here
//! and drain them to carousels from their event loop.

use super::types::PointerEvent;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Read handle on the router's platform-gesture flag.
#[derive(Clone, Debug, Default)]
pub struct PlatformGestureFlag(Rc<Cell<bool>>);

impl PlatformGestureFlag {
    pub fn in_progress(&self) -> bool {
        self.0.get()
    }
}

#[derive(Default)]
pub struct InputRouter {
    gesture: PlatformGestureFlag,
    queue: SmallVec<[PointerEvent; 8]>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to inject into each carousel's environment.
    pub fn gesture_flag(&self) -> PlatformGestureFlag {
        self.gesture.clone()
    }

    /// Host saw `gesturestart`.
    pub fn gesture_started(&self) {
        log::trace!("platform gesture started");
        self.gesture.0.set(true);
    }

    /// Host saw `gestureend`.
    pub fn gesture_ended(&self) {
        log::trace!("platform gesture ended");
        self.gesture.0.set(false);
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}
