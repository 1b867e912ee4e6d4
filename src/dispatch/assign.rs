use crate::list::{Cons, Nil, TypeList};
use crate::raw::access;

/// Clone-assigns between two live values of the alternative `index` selects.
pub trait CopyAssignDispatch: TypeList {
    /// Assigns a clone of the value at `src` onto the value at `dst`.
    ///
    /// # Safety
    /// - Both addresses must be distinct buffers laid out for this set.
    /// - If `index < LEN`, both must hold live values of that alternative.
    unsafe fn copy_assign(index: usize, dst: *mut u8, src: *const u8);
}

impl CopyAssignDispatch for Nil {
    #[inline(always)]
    unsafe fn copy_assign(_index: usize, _dst: *mut u8, _src: *const u8) {}
}

impl<H: Clone, T: CopyAssignDispatch> CopyAssignDispatch for Cons<H, T> {
    #[inline]
    unsafe fn copy_assign(index: usize, dst: *mut u8, src: *const u8) {
        if index == 0 {
            // SAFETY: both slots hold live `H` values.
            unsafe { access::clone_assign_at::<H>(dst, src) }
        } else {
            // SAFETY: forwarded contract, shifted by one position.
            unsafe { T::copy_assign(index - 1, dst, src) }
        }
    }
}

/// Move-assigns between two live values of the alternative `index` selects.
pub trait MoveAssignDispatch: TypeList {
    /// Moves the value at `src` onto the value at `dst`, dropping the old
    /// `dst` value. After the call `src` holds no live value.
    ///
    /// # Safety
    /// - Both addresses must be distinct buffers laid out for this set.
    /// - If `index < LEN`, both must hold live values of that alternative.
    unsafe fn move_assign(index: usize, dst: *mut u8, src: *mut u8);
}

impl MoveAssignDispatch for Nil {
    #[inline(always)]
    unsafe fn move_assign(_index: usize, _dst: *mut u8, _src: *mut u8) {}
}

impl<H, T: MoveAssignDispatch> MoveAssignDispatch for Cons<H, T> {
    #[inline]
    unsafe fn move_assign(index: usize, dst: *mut u8, src: *mut u8) {
        if index == 0 {
            // SAFETY: both slots hold live `H` values; `src` is consumed.
            unsafe { access::move_assign_at::<H>(dst, src) }
        } else {
            // SAFETY: forwarded contract, shifted by one position.
            unsafe { T::move_assign(index - 1, dst, src) }
        }
    }
}
