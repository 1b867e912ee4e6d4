use core::fmt;
use core::mem;

use super::{StorageError, Strategy, INVALID};
use crate::dispatch::{
    CopyAssignDispatch, CopyConstructDispatch, DestroyDispatch, MoveAssignDispatch,
    MoveConstructDispatch,
};
use crate::list::{AllTriviallyCopyable, Index, IndexOf, TypeList};
use crate::raw::{access, AlignedBuffer};
use crate::trace::lifecycle_event;

/// Buffer plus active index, torn down only when the owner says so.
///
/// `RawStorage` never runs a destructor on its own: dropping it while a
/// value is live leaks that value, exactly like `ManuallyDrop`. Call
/// [`destroy`](Self::destroy) first, or use
/// [`VariantStorage`](super::VariantStorage) for automatic teardown.
///
/// ## Invariant
/// Whenever `index() != INVALID`, the buffer holds a live value of the
/// alternative at that index, and no other alternative is live.
pub struct RawStorage<L: TypeList> {
    pub(super) buffer: AlignedBuffer<L>,
    pub(super) index: usize,
}

impl<L: TypeList> RawStorage<L> {
    /// Teardown strategy of this storage type.
    pub const STRATEGY: Strategy = Strategy::Manual;

    /// A storage holding nothing.
    #[inline]
    pub const fn vacant() -> Self {
        Self {
            buffer: AlignedBuffer::uninit(),
            index: INVALID,
        }
    }

    /// A storage holding `value`.
    #[inline]
    pub fn with<T, I: Index>(value: T) -> Self
    where
        L: IndexOf<T, I>,
    {
        let mut storage = Self::vacant();
        storage.put::<T, I>(value);
        storage
    }

    /// The active index, or [`INVALID`] when vacant.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// `true` when no alternative is live.
    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.index == INVALID
    }

    /// `true` when the live alternative is `T`.
    #[inline]
    pub fn holds<T, I: Index>(&self) -> bool
    where
        L: IndexOf<T, I>,
    {
        self.index == <L as IndexOf<T, I>>::INDEX
    }

    /// Type name of the live alternative.
    #[inline]
    pub fn active_name(&self) -> Option<&'static str> {
        L::name_at(self.index)
    }

    /// Teardown strategy of this storage type.
    #[inline]
    pub const fn strategy(&self) -> Strategy {
        Self::STRATEGY
    }

    /// The underlying buffer.
    #[inline]
    pub const fn buffer(&self) -> &AlignedBuffer<L> {
        &self.buffer
    }

    /// Address of the buffer.
    #[inline]
    pub const fn data(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    /// Mutable address of the buffer, for owner-driven construction.
    ///
    /// After constructing an alternative there, record it with
    /// [`set_index`](Self::set_index).
    #[inline]
    pub fn data_mut(&mut self) -> *mut u8 {
        self.buffer.as_mut_ptr()
    }

    /// Records `index` as the active alternative.
    ///
    /// # Errors
    /// [`StorageError::IndexOutOfRange`] if `index` is neither a valid
    /// position nor [`INVALID`]; the active index is left unchanged.
    ///
    /// # Safety
    /// If `index` is a valid position, a live value of that alternative must
    /// occupy the buffer, and whatever was live before must already have
    /// been dropped or moved out.
    #[inline]
    pub unsafe fn set_index(&mut self, index: usize) -> Result<(), StorageError> {
        if index != INVALID && index >= L::LEN {
            return Err(StorageError::IndexOutOfRange { index, len: L::LEN });
        }
        self.index = index;
        Ok(())
    }

    /// Constructs `value` in the vacant buffer and records its index.
    ///
    /// # Errors
    /// [`StorageError::Occupied`] if a value is already live; `value` is
    /// dropped and the storage is left unchanged.
    pub fn emplace<T, I: Index>(&mut self, value: T) -> Result<(), StorageError>
    where
        L: IndexOf<T, I>,
    {
        if !self.is_vacant() {
            return Err(StorageError::Occupied { active: self.index });
        }
        self.put::<T, I>(value);
        Ok(())
    }

    #[inline]
    fn put<T, I: Index>(&mut self, value: T)
    where
        L: IndexOf<T, I>,
    {
        debug_assert!(self.is_vacant());
        // SAFETY: the buffer is laid out for every alternative of `L`, `T`
        // is one of them, and nothing is live.
        unsafe { access::write_at(self.buffer.as_mut_ptr(), value) };
        self.index = <L as IndexOf<T, I>>::INDEX;
        lifecycle_event!(L, self.index, "emplaced alternative");
    }

    /// Views the live value as `T` without checking the index.
    ///
    /// # Safety
    /// The live alternative must be `T`.
    #[inline]
    pub unsafe fn assume_ref<T>(&self) -> &T {
        // SAFETY: caller asserts a live `T`.
        unsafe { access::as_ref_at::<T>(self.buffer.as_ptr()) }
    }

    /// Views the live value as `&mut T` without checking the index.
    ///
    /// # Safety
    /// The live alternative must be `T`.
    #[inline]
    pub unsafe fn assume_mut<T>(&mut self) -> &mut T {
        // SAFETY: caller asserts a live `T`; `&mut self` is exclusive.
        unsafe { access::as_mut_at::<T>(self.buffer.as_mut_ptr()) }
    }

    /// Copies the buffer bytes and index into a new storage.
    ///
    /// Only available when every alternative is `Copy`, so a byte copy is a
    /// complete copy of whichever alternative is live.
    #[inline]
    pub fn bitwise_copy(&self) -> Self
    where
        L: AllTriviallyCopyable,
    {
        let mut copy = Self::vacant();
        // SAFETY: same layout, distinct buffers; every alternative is `Copy`.
        unsafe {
            access::copy_bytes(
                copy.buffer.as_mut_ptr(),
                self.buffer.as_ptr(),
                AlignedBuffer::<L>::SIZE,
            );
        }
        copy.index = self.index;
        copy
    }
}

impl<L: DestroyDispatch> RawStorage<L> {
    /// Drops the live value, if any, and marks the storage vacant.
    #[inline]
    pub fn destroy(&mut self) {
        if self.is_vacant() {
            return;
        }
        // Vacate first: a panicking destructor must not leave a dropped value indexed.
        let index = mem::replace(&mut self.index, INVALID);
        lifecycle_event!(L, index, "destroying alternative");
        // SAFETY: invariant: a valid index means a live value of that alternative.
        unsafe { L::destroy(index, self.buffer.as_mut_ptr()) };
    }
}

impl<L: MoveConstructDispatch> RawStorage<L> {
    /// Moves the live value into a new storage, leaving `self` vacant.
    pub fn take(&mut self) -> Self {
        let mut target = Self::vacant();
        if !self.is_vacant() {
            lifecycle_event!(L, self.index, "moving alternative out");
            // SAFETY: `self` holds a live value at `index`; `target` is vacant.
            unsafe {
                L::move_construct(self.index, target.buffer.as_mut_ptr(), self.buffer.as_mut_ptr());
            }
            target.index = self.index;
            self.index = INVALID;
        }
        target
    }
}

impl<L> RawStorage<L>
where
    L: DestroyDispatch + MoveConstructDispatch + MoveAssignDispatch,
{
    /// Moves `source`'s value into `self`, leaving `source` vacant.
    ///
    /// When both hold the same alternative this is a move-assignment;
    /// otherwise the current value is destroyed and the new one
    /// move-constructed in its place.
    pub fn assign_from(&mut self, source: &mut Self) {
        if source.is_vacant() {
            self.destroy();
            return;
        }
        if self.index == source.index {
            // The value leaves `source` before the old one is dropped.
            let index = mem::replace(&mut source.index, INVALID);
            lifecycle_event!(L, index, "move-assigning alternative");
            // SAFETY: both hold live values of the same alternative.
            unsafe {
                L::move_assign(index, self.buffer.as_mut_ptr(), source.buffer.as_mut_ptr());
            }
        } else {
            self.destroy();
            lifecycle_event!(L, source.index, "move-constructing alternative");
            // SAFETY: `self` is now vacant, `source` holds a live value.
            unsafe {
                L::move_construct(
                    source.index,
                    self.buffer.as_mut_ptr(),
                    source.buffer.as_mut_ptr(),
                );
            }
            self.index = mem::replace(&mut source.index, INVALID);
        }
    }
}

impl<L: CopyConstructDispatch> RawStorage<L> {
    /// A new storage holding a clone of the live value.
    pub fn clone_storage(&self) -> Self {
        let mut copy = Self::vacant();
        if !self.is_vacant() {
            lifecycle_event!(L, self.index, "copy-constructing alternative");
            // SAFETY: `self` holds a live value at `index`; `copy` is vacant.
            unsafe {
                L::copy_construct(self.index, copy.buffer.as_mut_ptr(), self.buffer.as_ptr());
            }
            copy.index = self.index;
        }
        copy
    }
}

impl<L> RawStorage<L>
where
    L: DestroyDispatch + CopyConstructDispatch + CopyAssignDispatch,
{
    /// Makes `self` hold a clone of `source`'s value.
    ///
    /// When both hold the same alternative this is a clone-assignment;
    /// otherwise the current value is destroyed and a clone constructed.
    pub fn clone_assign(&mut self, source: &Self) {
        if source.is_vacant() {
            self.destroy();
            return;
        }
        if self.index == source.index {
            lifecycle_event!(L, self.index, "copy-assigning alternative");
            // SAFETY: both hold live values of the same alternative.
            unsafe {
                L::copy_assign(self.index, self.buffer.as_mut_ptr(), source.buffer.as_ptr());
            }
        } else {
            self.destroy();
            lifecycle_event!(L, source.index, "copy-constructing alternative");
            // SAFETY: `self` is now vacant, `source` holds a live value.
            unsafe {
                L::copy_construct(source.index, self.buffer.as_mut_ptr(), source.buffer.as_ptr());
            }
            self.index = source.index;
        }
    }
}

impl<L> Clone for RawStorage<L>
where
    L: DestroyDispatch + CopyConstructDispatch + CopyAssignDispatch,
{
    fn clone(&self) -> Self {
        self.clone_storage()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clone_assign(source);
    }
}

impl<L: TypeList> Default for RawStorage<L> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<L: TypeList> fmt::Debug for RawStorage<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("index", &self.index)
            .field("alternative", &self.active_name())
            .field("buffer", &self.buffer)
            .finish()
    }
}
