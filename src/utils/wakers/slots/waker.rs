use std::sync::{Arc, Mutex};
use std::task::Wake;

use super::Readiness;

/// The waker an element or transform future sees: waking it queues its
/// slot for the next pass of `MapAsync`.
#[derive(Debug, Clone)]
pub(crate) struct SlotWaker {
    pub(crate) index: usize,
    pub(crate) readiness: Arc<Mutex<Readiness>>,
}

impl SlotWaker {
    pub(crate) fn new(index: usize, readiness: Arc<Mutex<Readiness>>) -> Self {
        Self { index, readiness }
    }
}

impl Wake for SlotWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref()
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let mut readiness = self.readiness.lock().unwrap();
        // Only the first wake since the last poll needs to reach the parent.
        if !readiness.set_ready(self.index) {
            readiness
                .parent_waker()
                .expect("slot woken before the sequence was polled")
                .wake_by_ref()
        }
    }
}
