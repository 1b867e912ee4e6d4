use crate::list::{Cons, Nil, TypeList};
use crate::raw::access;

/// Clone-constructs whichever alternative `index` selects.
///
/// Implemented for sets whose alternatives are all `Clone`.
pub trait CopyConstructDispatch: TypeList {
    /// Constructs at `dst` a clone of the alternative at `index` in `src`.
    ///
    /// # Safety
    /// - Both addresses must be distinct buffers laid out for this set.
    /// - If `index < LEN`, `src` must hold a live value of that alternative
    ///   and `dst` must be vacant.
    unsafe fn copy_construct(index: usize, dst: *mut u8, src: *const u8);
}

impl CopyConstructDispatch for Nil {
    #[inline(always)]
    unsafe fn copy_construct(_index: usize, _dst: *mut u8, _src: *const u8) {}
}

impl<H: Clone, T: CopyConstructDispatch> CopyConstructDispatch for Cons<H, T> {
    #[inline]
    unsafe fn copy_construct(index: usize, dst: *mut u8, src: *const u8) {
        if index == 0 {
            // SAFETY: `src` holds a live `H`, `dst` is vacant.
            unsafe { access::clone_at::<H>(dst, src) }
        } else {
            // SAFETY: forwarded contract, shifted by one position.
            unsafe { T::copy_construct(index - 1, dst, src) }
        }
    }
}

/// Move-constructs whichever alternative `index` selects.
pub trait MoveConstructDispatch: TypeList {
    /// Moves the alternative at `index` from `src` into `dst`.
    ///
    /// After the call `src` holds no live value.
    ///
    /// # Safety
    /// - Both addresses must be distinct buffers laid out for this set.
    /// - If `index < LEN`, `src` must hold a live value of that alternative
    ///   and `dst` must be vacant.
    unsafe fn move_construct(index: usize, dst: *mut u8, src: *mut u8);
}

impl MoveConstructDispatch for Nil {
    #[inline(always)]
    unsafe fn move_construct(_index: usize, _dst: *mut u8, _src: *mut u8) {}
}

impl<H, T: MoveConstructDispatch> MoveConstructDispatch for Cons<H, T> {
    #[inline]
    unsafe fn move_construct(index: usize, dst: *mut u8, src: *mut u8) {
        if index == 0 {
            // SAFETY: `src` holds a live `H` which is consumed here.
            unsafe {
                let value = access::read_at::<H>(src);
                access::write_at::<H>(dst, value);
            }
        } else {
            // SAFETY: forwarded contract, shifted by one position.
            unsafe { T::move_construct(index - 1, dst, src) }
        }
    }
}
