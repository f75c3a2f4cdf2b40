mod readiness;
mod waker;
mod waker_set;

pub(crate) use readiness::Readiness;
pub(crate) use waker::SlotWaker;
pub(crate) use waker_set::SlotWakers;
