//! Delayed open/close scheduling for hover-driven overlays.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use aurora_core::Controllable;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::{on_cleanup, set_timeout_with_handle, Callable};

/// Writes an open state after a delay, replacing any pending write.
#[derive(Clone)]
pub(crate) struct DelayedOpen {
    open: Controllable<bool>,
    pending: Rc<Cell<Option<TimeoutHandle>>>,
}

impl DelayedOpen {
    pub(crate) fn new(open: Controllable<bool>) -> Self {
        let delayed = Self {
            open,
            pending: Rc::new(Cell::new(None)),
        };
        let pending = Rc::clone(&delayed.pending);
        on_cleanup(move || {
            if let Some(handle) = pending.take() {
                handle.clear();
            }
        });
        delayed
    }

    pub(crate) fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            handle.clear();
        }
    }

    /// Sets the state to `next` after `delay`. A zero delay applies at once.
    pub(crate) fn schedule(&self, next: bool, delay: Duration) {
        self.cancel();
        if delay.is_zero() {
            self.open.set.call(next);
            return;
        }
        let open = self.open;
        let pending = Rc::clone(&self.pending);
        let scheduled = set_timeout_with_handle(
            move || {
                pending.set(None);
                open.set.call(next);
            },
            delay,
        );
        match scheduled {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(_) => self.open.set.call(next),
        }
    }
}
