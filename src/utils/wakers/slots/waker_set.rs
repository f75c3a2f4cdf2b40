use std::sync::Arc;
use std::sync::Mutex;
use std::task::Waker;

use super::{Readiness, SlotWaker};

/// The wakers of every slot of one `MapAsync`, indexed like its elements.
pub(crate) struct SlotWakers {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<Readiness>>,
}

impl SlotWakers {
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(Readiness::new(len)));
        let wakers = (0..len)
            .map(|i| Arc::new(SlotWaker::new(i, readiness.clone())).into())
            .collect();
        Self { wakers, readiness }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Waker> {
        self.wakers.get(index)
    }

    /// The woken set shared by every slot waker.
    pub(crate) fn readiness(&self) -> &Mutex<Readiness> {
        self.readiness.as_ref()
    }
}
