/// Index-aligned output storage, filled in whatever order slots complete.
#[derive(Debug)]
pub(crate) struct OutputVec<T> {
    data: Vec<Option<T>>,
    filled: usize,
}

impl<T> Default for OutputVec<T> {
    fn default() -> Self {
        Self::uninit(0)
    }
}

impl<T> OutputVec<T> {
    /// Create storage for `len` outputs, none of which are written yet.
    pub(crate) fn uninit(len: usize) -> Self {
        Self {
            data: std::iter::repeat_with(|| None).take(len).collect(),
            filled: 0,
        }
    }

    /// Write a value into the slot at the index.
    pub(crate) fn write(&mut self, idx: usize, value: T) {
        let slot = &mut self.data[idx];
        debug_assert!(slot.is_none(), "output slot {idx} written twice");
        if slot.replace(value).is_none() {
            self.filled += 1;
        }
    }

    /// Returns `true` once every slot has been written.
    pub(crate) fn is_filled(&self) -> bool {
        self.filled == self.data.len()
    }

    /// Take the outputs in index order, leaving behind an empty vector.
    pub(crate) fn take(&mut self) -> Vec<T> {
        debug_assert!(self.is_filled(), "outputs taken before every slot was written");
        self.filled = 0;
        std::mem::take(&mut self.data).into_iter().flatten().collect()
    }
}
