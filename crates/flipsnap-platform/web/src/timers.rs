use flipsnap_core::{TimerId, TimerScheduler};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

struct Entry {
    handle: i32,
    repeating: bool,
    _closure: Closure<dyn FnMut()>,
}

#[derive(Default)]
struct TimerTable {
    next_id: TimerId,
    entries: HashMap<TimerId, Entry>,
}

/// [`TimerScheduler`] on `window.setTimeout` and `window.setInterval`.
#[derive(Clone)]
pub struct WebTimers {
    window: Window,
    table: Rc<RefCell<TimerTable>>,
}

impl WebTimers {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            table: Rc::new(RefCell::new(TimerTable::default())),
        }
    }

    pub fn pending(&self) -> usize {
        self.table.borrow().entries.len()
    }

    fn allocate(&self) -> TimerId {
        let mut table = self.table.borrow_mut();
        table.next_id += 1;
        table.next_id
    }

    fn register(&self, id: TimerId, repeating: bool, handle: Result<i32, JsValue>, closure: Closure<dyn FnMut()>) {
        match handle {
            Ok(handle) => {
                self.table.borrow_mut().entries.insert(
                    id,
                    Entry {
                        handle,
                        repeating,
                        _closure: closure,
                    },
                );
            }
            Err(error) => log::warn!(
                "failed to schedule timer {id}: {}",
                crate::error::describe(&error)
            ),
        }
    }
}

impl TimerScheduler for WebTimers {
    fn schedule_once(&self, delay_millis: u64, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = self.allocate();
        let table = Rc::downgrade(&self.table);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            // drop the entry first so the callback may schedule again
            let entry = table
                .upgrade()
                .and_then(|table| table.borrow_mut().entries.remove(&id));
            if let Some(callback) = callback.take() {
                callback();
            }
            drop(entry);
        }) as Box<dyn FnMut()>);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_millis.min(i32::MAX as u64) as i32,
            );
        self.register(id, false, handle, closure);
        id
    }

    fn schedule_repeating(&self, period_millis: u64, mut callback: Box<dyn FnMut()>) -> TimerId {
        let id = self.allocate();
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_millis.min(i32::MAX as u64) as i32,
            );
        self.register(id, true, handle, closure);
        id
    }

    fn cancel(&self, id: TimerId) {
        let Some(entry) = self.table.borrow_mut().entries.remove(&id) else {
            return;
        };
        if entry.repeating {
            self.window.clear_interval_with_handle(entry.handle);
        } else {
            self.window.clear_timeout_with_handle(entry.handle);
        }
    }
}
