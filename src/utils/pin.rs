use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index`.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
pub(crate) fn get_pin_mut<T>(slice: Pin<&mut [T]>, index: usize) -> Pin<&mut T> {
    // SAFETY: indexing never moves elements of the slice, and the element is
    // pinned because it comes from a pinned slice.
    unsafe { slice.map_unchecked_mut(|slice| &mut slice[index]) }
}
