use crate::platform::{TimerId, TimerScheduler};
use std::rc::Rc;

/// Handle to a scheduled timer.
///
/// The timer is cancelled when the registration is cancelled explicitly or
/// dropped, so a registration stored in a struct field cannot outlive its
/// owner.
pub struct TimerRegistration {
    scheduler: Rc<dyn TimerScheduler>,
    id: Option<TimerId>,
}

impl TimerRegistration {
    pub fn once(
        scheduler: &Rc<dyn TimerScheduler>,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> Self {
        let id = scheduler.schedule_once(delay_millis, Box::new(callback));
        Self {
            scheduler: Rc::clone(scheduler),
            id: Some(id),
        }
    }

    pub fn repeating(
        scheduler: &Rc<dyn TimerScheduler>,
        period_millis: u64,
        callback: impl FnMut() + 'static,
    ) -> Self {
        let id = scheduler.schedule_repeating(period_millis, Box::new(callback));
        Self {
            scheduler: Rc::clone(scheduler),
            id: Some(id),
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl std::fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}
