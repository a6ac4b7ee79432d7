//! Trailing-edge debounce around a single owned timer handle.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Coalesces rapid `schedule` calls into one execution after a quiet period.
///
/// The pending `Timeout` is owned: rescheduling drops (and thereby cancels)
/// the previous one, and `cancel` must be called on component teardown so no
/// write lands after disposal.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    handle: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            handle: StoredValue::new_local(None),
        }
    }

    /// Schedule `f` to run after the quiet period, replacing any pending run.
    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        self.handle.try_update_value(|slot| {
            *slot = Some(timeout);
        });
    }

    /// Drop the pending run, if any.
    pub fn cancel(&self) {
        self.handle.try_update_value(|slot| {
            *slot = None;
        });
    }
}
