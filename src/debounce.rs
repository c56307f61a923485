use std::cell::RefCell;

use gloo::timers::callback::Timeout;

pub(crate) const RESIZE_DEBOUNCE_MS: u32 = 200;

pub(crate) struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub(crate) fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub(crate) fn call<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.delay_ms, action);
        // Dropping the previous handle clears its timer.
        drop(self.pending.replace(Some(timeout)));
    }

    pub(crate) fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
