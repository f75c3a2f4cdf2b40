//! Utilities to implement the different futures of this crate.

mod output;
mod pin;
mod wakers;

pub(crate) use output::OutputVec;
pub(crate) use pin::get_pin_mut;
pub(crate) use wakers::SlotWakers;
