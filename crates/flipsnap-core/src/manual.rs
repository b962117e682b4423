//! Deterministic virtual-time scheduler.
//!
//! `ManualTimers` implements both [`Clock`] and [`TimerScheduler`]. Time only
//! moves when [`ManualTimers::advance_by`] is called, which makes animation
//! and timeout behaviour reproducible in tests and headless runners.

use crate::platform::{Clock, TimerId, TimerScheduler};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

enum TimerCallback {
    Once(Box<dyn FnOnce()>),
    Repeating(Box<dyn FnMut()>),
}

struct TimerEntry {
    due: u64,
    period: Option<u64>,
    callback: TimerCallback,
}

#[derive(Default)]
struct TimerQueue {
    now: u64,
    next_id: TimerId,
    entries: BTreeMap<TimerId, TimerEntry>,
    running: Option<TimerId>,
    running_cancelled: bool,
}

impl TimerQueue {
    fn insert(&mut self, entry: TimerEntry) -> TimerId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.insert(id, entry);
        id
    }

    /// Earliest timer due at or before `limit`; ties fire in scheduling order.
    fn next_due(&self, limit: u64) -> Option<TimerId> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.due <= limit)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)
    }
}

/// Virtual clock plus timer queue. Cloning shares the same queue.
#[derive(Clone, Default)]
pub struct ManualTimers {
    queue: Rc<RefCell<TimerQueue>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.queue.borrow().now
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Due time of the next pending timer, if any.
    pub fn next_due_time(&self) -> Option<u64> {
        self.queue
            .borrow()
            .entries
            .values()
            .map(|entry| entry.due)
            .min()
    }

    /// Advance virtual time, firing every timer that comes due on the way.
    ///
    /// Callbacks run with the queue unlocked, so they may schedule or cancel
    /// timers (including themselves).
    pub fn advance_by(&self, millis: u64) {
        let target = self.now().saturating_add(millis);
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let Some(id) = queue.next_due(target) else {
                    break;
                };
                let Some(entry) = queue.entries.remove(&id) else {
                    break;
                };
                queue.now = entry.due;
                queue.running = Some(id);
                queue.running_cancelled = false;
                (id, entry)
            };
            let (id, entry) = next;
            match entry.callback {
                TimerCallback::Once(callback) => callback(),
                TimerCallback::Repeating(mut callback) => {
                    callback();
                    let mut queue = self.queue.borrow_mut();
                    if !queue.running_cancelled {
                        let period = entry.period.unwrap_or(1).max(1);
                        queue.entries.insert(
                            id,
                            TimerEntry {
                                due: entry.due + period,
                                period: entry.period,
                                callback: TimerCallback::Repeating(callback),
                            },
                        );
                    }
                }
            }
            let mut queue = self.queue.borrow_mut();
            queue.running = None;
            queue.running_cancelled = false;
        }
        self.queue.borrow_mut().now = target;
    }

    /// Keep advancing until no timers remain or `limit_millis` has elapsed.
    pub fn run_until_idle(&self, limit_millis: u64) {
        let deadline = self.now().saturating_add(limit_millis);
        while let Some(due) = self.next_due_time() {
            if due > deadline {
                break;
            }
            let now = self.now();
            self.advance_by(due.saturating_sub(now));
        }
    }
}

impl Clock for ManualTimers {
    fn now_millis(&self) -> u64 {
        self.now()
    }
}

impl TimerScheduler for ManualTimers {
    fn schedule_once(&self, delay_millis: u64, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now + delay_millis;
        queue.insert(TimerEntry {
            due,
            period: None,
            callback: TimerCallback::Once(callback),
        })
    }

    fn schedule_repeating(&self, period_millis: u64, callback: Box<dyn FnMut()>) -> TimerId {
        let mut queue = self.queue.borrow_mut();
        let period = period_millis.max(1);
        let due = queue.now + period;
        queue.insert(TimerEntry {
            due,
            period: Some(period),
            callback: TimerCallback::Repeating(callback),
        })
    }

    fn cancel(&self, id: TimerId) {
        let mut queue = self.queue.borrow_mut();
        queue.entries.remove(&id);
        if queue.running == Some(id) {
            queue.running_cancelled = true;
        }
    }
}

#[cfg(test)]
#[path = "tests/manual_timers_tests.rs"]
mod tests;
