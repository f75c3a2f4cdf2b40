use core::task::Waker;
use fixedbitset::FixedBitSet;

/// Which `MapAsync` slots were woken since the last pass, plus the waker of
/// the task driving them.
#[derive(Debug)]
pub(crate) struct Readiness {
    ready_count: usize,
    readiness_list: FixedBitSet,
    parent_waker: Option<Waker>,
}

impl Readiness {
    /// Every slot starts out woken: the first pass polls each element once.
    pub(crate) fn new(len: usize) -> Self {
        let mut readiness_list = FixedBitSet::with_capacity(len);
        readiness_list.insert_range(..);
        Self {
            ready_count: len,
            readiness_list,
            parent_waker: None,
        }
    }

    /// Mark a slot as woken. Returns `true` if it already was, in which case
    /// the driving task has been notified already.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        if !self.readiness_list[index] {
            self.ready_count += 1;
            self.readiness_list.insert(index);
            false
        } else {
            true
        }
    }

    /// Claim a slot for polling in the current pass. Returns `false` if it
    /// was not woken.
    pub(crate) fn clear_ready(&mut self, index: usize) -> bool {
        if self.readiness_list[index] {
            self.ready_count -= 1;
            self.readiness_list.set(index, false);
            true
        } else {
            false
        }
    }

    /// Whether a pass has anything to poll.
    pub(crate) fn any_ready(&self) -> bool {
        self.ready_count > 0
    }

    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Record the driving task's waker. Called before every pass.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}
