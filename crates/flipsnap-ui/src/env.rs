use flipsnap_core::{Clock, ManualTimers, SystemClock, TimerScheduler};
use flipsnap_foundation::{Capabilities, PlatformGestureFlag};
use std::rc::Rc;

/// Services injected into a carousel.
#[derive(Clone)]
pub struct CarouselEnv {
    pub capabilities: Capabilities,
    pub clock: Rc<dyn Clock>,
    pub scheduler: Rc<dyn TimerScheduler>,
    pub gestures: PlatformGestureFlag,
}

impl CarouselEnv {
    pub fn new(clock: Rc<dyn Clock>, scheduler: Rc<dyn TimerScheduler>) -> Self {
        Self {
            capabilities: Capabilities::default(),
            clock,
            scheduler,
            gestures: PlatformGestureFlag::default(),
        }
    }

    /// Host scheduler with the system clock.
    pub fn with_scheduler(scheduler: Rc<dyn TimerScheduler>) -> Self {
        Self::new(Rc::new(SystemClock::new()), scheduler)
    }

    /// Virtual time: both clock and timers come from `timers`.
    pub fn manual(timers: &ManualTimers) -> Self {
        Self::new(Rc::new(timers.clone()), Rc::new(timers.clone()))
    }

    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_gestures(mut self, gestures: PlatformGestureFlag) -> Self {
        self.gestures = gestures;
        self
    }
}

impl std::fmt::Debug for CarouselEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselEnv")
            .field("capabilities", &self.capabilities)
            .field("gesture_in_progress", &self.gestures.in_progress())
            .finish_non_exhaustive()
    }
}
