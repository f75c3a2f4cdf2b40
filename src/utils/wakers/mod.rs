mod slots;

pub(crate) use slots::SlotWakers;
