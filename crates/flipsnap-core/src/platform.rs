//! Platform abstraction traits for carousel runtime services.
//!
//! These traits let the carousel delegate timing and deferred work to the
//! host environment. Everything runs on one logical thread, so neither trait
//! requires `Send` or `Sync`.

/// Identifier handed out by a [`TimerScheduler`].
pub type TimerId = u64;

/// Provides timing information for the runtime.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_millis(&self) -> u64;
}

/// Schedules deferred callbacks on the host event loop.
///
/// Callbacks must never run synchronously from inside `schedule_*`.
pub trait TimerScheduler {
    /// Run `callback` once after `delay_millis`.
    fn schedule_once(&self, delay_millis: u64, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Run `callback` every `period_millis` until cancelled.
    fn schedule_repeating(&self, period_millis: u64, callback: Box<dyn FnMut()>) -> TimerId;

    /// Cancel a pending timer. Unknown or already-fired ids are ignored.
    fn cancel(&self, id: TimerId);
}
