//! Unsafe, centralized operations on untyped buffer addresses.
//!
//! Every place the crate reinterprets buffer bytes as a concrete alternative
//! goes through one of these helpers. They are the only audited surface for:
//! - in-place construction (`ptr::write`)
//! - drops (`drop_in_place`)
//! - bitwise moves (`ptr::read`)
//! - clone / assignment between two live values
//! - conversion to references
//!
//! ## Core invariant
//! For all callers in this crate, `slot` is the start of an `AlignedBuffer`
//! whose layout covers every alternative, so it is always suitably sized and
//! aligned for `T`. Whether a *live* `T` sits there is tracked by the caller's
//! active index, never by inspecting the bytes.

use core::ptr;

/// Constructs `value` at `slot`.
///
/// # Safety
/// - `slot` must be valid for writes of `T` and aligned for `T`.
/// - Any value previously live at `slot` must already have been dropped or
///   moved out; otherwise it leaks.
#[inline(always)]
pub(crate) unsafe fn write_at<T>(slot: *mut u8, value: T) {
    // SAFETY: caller upholds validity and the overwrite contract.
    unsafe { ptr::write(slot.cast::<T>(), value) }
}

/// Drops the `T` living at `slot`.
///
/// # Safety
/// - A live `T` must occupy `slot`.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_at<T>(slot: *mut u8) {
    // SAFETY: caller asserts a live `T` and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.cast::<T>()) }
}

/// Bitwise-moves the `T` out of `slot`, leaving it vacated.
///
/// # Safety
/// - A live `T` must occupy `slot`.
/// - After the call the slot holds no live value; the caller must not drop
///   it again.
#[inline(always)]
pub(crate) unsafe fn read_at<T>(slot: *const u8) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { ptr::read(slot.cast::<T>()) }
}

/// Constructs a clone of the `T` at `src` into the vacant `dst`.
///
/// # Safety
/// - A live `T` must occupy `src`.
/// - `dst` must be vacant, valid for writes of `T`, and must not overlap `src`.
#[inline(always)]
pub(crate) unsafe fn clone_at<T: Clone>(dst: *mut u8, src: *const u8) {
    // SAFETY: caller asserts `src` is live and `dst` is vacant.
    unsafe {
        let value = (*src.cast::<T>()).clone();
        ptr::write(dst.cast::<T>(), value);
    }
}

/// Clone-assigns the `T` at `src` onto the live `T` at `dst`.
///
/// # Safety
/// - Live `T` values must occupy both `dst` and `src`.
/// - The slots must not overlap.
#[inline(always)]
pub(crate) unsafe fn clone_assign_at<T: Clone>(dst: *mut u8, src: *const u8) {
    // SAFETY: caller asserts both slots are live, distinct `T`s.
    unsafe { (*dst.cast::<T>()).clone_from(&*src.cast::<T>()) }
}

/// Moves the `T` at `src` onto the live `T` at `dst`.
///
/// The previous value at `dst` is dropped; `src` is left vacated.
///
/// # Safety
/// - Live `T` values must occupy both `dst` and `src`.
/// - The slots must not overlap.
/// - After the call `src` holds no live value.
#[inline(always)]
pub(crate) unsafe fn move_assign_at<T>(dst: *mut u8, src: *mut u8) {
    // SAFETY: caller asserts both slots are live; `src` is consumed.
    unsafe { *dst.cast::<T>() = ptr::read(src.cast::<T>()) }
}

/// Interprets `slot` as `&T`.
///
/// # Safety
/// - A live `T` must occupy `slot` for the whole lifetime `'a`.
/// - Normal aliasing rules apply to the returned reference.
#[inline(always)]
pub(crate) unsafe fn as_ref_at<'a, T>(slot: *const u8) -> &'a T {
    // SAFETY: caller asserts a live `T` outliving `'a`.
    unsafe { &*slot.cast::<T>() }
}

/// Interprets `slot` as `&mut T`.
///
/// # Safety
/// - A live `T` must occupy `slot` for the whole lifetime `'a`.
/// - The returned reference must be exclusive for its lifetime.
#[inline(always)]
pub(crate) unsafe fn as_mut_at<'a, T>(slot: *mut u8) -> &'a mut T {
    // SAFETY: caller asserts a live, exclusively borrowed `T`.
    unsafe { &mut *slot.cast::<T>() }
}

/// Copies `len` bytes from `src` to `dst`.
///
/// # Safety
/// - Both ranges must be valid for `len` bytes and must not overlap.
#[inline(always)]
pub(crate) unsafe fn copy_bytes(dst: *mut u8, src: *const u8, len: usize) {
    // SAFETY: caller asserts both ranges are valid and disjoint.
    unsafe { ptr::copy_nonoverlapping(src, dst, len) }
}
