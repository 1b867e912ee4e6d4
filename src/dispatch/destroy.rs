use crate::list::{Cons, Nil, TypeList};
use crate::raw::access;

/// Drops whichever alternative `index` selects.
pub trait DestroyDispatch: TypeList {
    /// Drops the alternative at `index` living in `slot`.
    ///
    /// # Safety
    /// - `slot` must address a buffer laid out for this set.
    /// - If `index < LEN`, a live value of that alternative must occupy `slot`.
    /// - Must not be called twice for the same value.
    unsafe fn destroy(index: usize, slot: *mut u8);
}

impl DestroyDispatch for Nil {
    #[inline(always)]
    unsafe fn destroy(_index: usize, _slot: *mut u8) {}
}

impl<H, T: DestroyDispatch> DestroyDispatch for Cons<H, T> {
    #[inline]
    unsafe fn destroy(index: usize, slot: *mut u8) {
        if index == 0 {
            // SAFETY: index 0 selects `H`; caller asserts it is live.
            unsafe { access::drop_at::<H>(slot) }
        } else {
            // SAFETY: forwarded contract, shifted by one position.
            unsafe { T::destroy(index - 1, slot) }
        }
    }
}
