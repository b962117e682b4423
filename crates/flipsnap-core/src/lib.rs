//! Runtime services for flipsnap.
//!
//! The carousel never reads the wall clock or spawns timers directly. It is
//! handed a [`Clock`] and a [`TimerScheduler`] so hosts can plug in the
//! browser event loop, a native loop, or the deterministic [`ManualTimers`]
//! used by tests.

mod clock;
mod manual;
mod platform;
mod timer;

pub use clock::SystemClock;
pub use manual::ManualTimers;
pub use platform::{Clock, TimerId, TimerScheduler};
pub use timer::TimerRegistration;

pub mod prelude {
    pub use crate::clock::SystemClock;
    pub use crate::manual::ManualTimers;
    pub use crate::platform::{Clock, TimerId, TimerScheduler};
    pub use crate::timer::TimerRegistration;
}
