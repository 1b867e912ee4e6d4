use core::fmt;
use core::mem::ManuallyDrop;
use core::ptr;

use super::{RawStorage, StorageError, Strategy, INVALID};
use crate::dispatch::{
    CopyAssignDispatch, CopyConstructDispatch, DestroyDispatch, MoveAssignDispatch,
    MoveConstructDispatch,
};
use crate::list::{AllTriviallyCopyable, Index, IndexOf};
use crate::raw::AlignedBuffer;
use crate::trace::lifecycle_event;

/// Buffer plus active index with automatic teardown.
///
/// The teardown path is fixed per alternative set at compile time:
/// - [`Strategy::AllTrivial`] when no alternative needs drop glue. Dropping
///   the storage only resets the index; no dispatcher runs.
/// - [`Strategy::Dispatching`] otherwise. Dropping the storage destroys the
///   live value through the destroy dispatcher. A live alternative that is
///   itself trivial still goes through dispatch, where its drop is a no-op.
///
/// ```rust
/// use tagstore::{alternatives, VariantStorage};
///
/// let mut storage = VariantStorage::<alternatives![u32, String]>::vacant();
/// storage.emplace(String::from("halo")).unwrap();
/// assert_eq!(storage.index(), 1);
///
/// let copy = storage.clone();
/// assert_eq!(unsafe { copy.assume_ref::<String>() }, "halo");
///
/// storage.destroy();
/// assert!(storage.is_vacant());
/// ```
pub struct VariantStorage<L: DestroyDispatch> {
    raw: RawStorage<L>,
}

impl<L: DestroyDispatch> VariantStorage<L> {
    /// Teardown strategy chosen for `L`.
    pub const STRATEGY: Strategy = if L::ALL_TRIVIALLY_DESTRUCTIBLE {
        Strategy::AllTrivial
    } else {
        Strategy::Dispatching
    };

    /// A storage holding nothing.
    #[inline]
    pub const fn vacant() -> Self {
        Self {
            raw: RawStorage::vacant(),
        }
    }

    /// A storage holding `value`.
    #[inline]
    pub fn with<T, I: Index>(value: T) -> Self
    where
        L: IndexOf<T, I>,
    {
        Self {
            raw: RawStorage::with(value),
        }
    }

    /// Wraps an explicitly managed storage, taking over its teardown.
    #[inline]
    pub const fn from_raw(raw: RawStorage<L>) -> Self {
        Self { raw }
    }

    /// Releases the storage to explicit teardown; nothing is destroyed.
    #[inline]
    pub fn into_raw(self) -> RawStorage<L> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so `raw` is moved out exactly once.
        unsafe { ptr::read(&this.raw) }
    }

    /// The active index, or [`INVALID`] when vacant.
    #[inline]
    pub const fn index(&self) -> usize {
        self.raw.index()
    }

    /// `true` when no alternative is live.
    #[inline]
    pub const fn is_vacant(&self) -> bool {
        self.raw.is_vacant()
    }

    /// `true` when the live alternative is `T`.
    #[inline]
    pub fn holds<T, I: Index>(&self) -> bool
    where
        L: IndexOf<T, I>,
    {
        self.raw.holds::<T, I>()
    }

    /// Type name of the live alternative.
    #[inline]
    pub fn active_name(&self) -> Option<&'static str> {
        self.raw.active_name()
    }

    /// Teardown strategy chosen for `L`.
    #[inline]
    pub const fn strategy(&self) -> Strategy {
        Self::STRATEGY
    }

    /// The underlying buffer.
    #[inline]
    pub const fn buffer(&self) -> &AlignedBuffer<L> {
        self.raw.buffer()
    }

    /// Address of the buffer.
    #[inline]
    pub const fn data(&self) -> *const u8 {
        self.raw.data()
    }

    /// Mutable address of the buffer, for owner-driven construction.
    #[inline]
    pub fn data_mut(&mut self) -> *mut u8 {
        self.raw.data_mut()
    }

    /// Records `index` as the active alternative.
    ///
    /// # Errors
    /// See [`RawStorage::set_index`].
    ///
    /// # Safety
    /// See [`RawStorage::set_index`].
    #[inline]
    pub unsafe fn set_index(&mut self, index: usize) -> Result<(), StorageError> {
        // SAFETY: forwarded contract.
        unsafe { self.raw.set_index(index) }
    }

    /// Constructs `value` in the vacant buffer and records its index.
    ///
    /// # Errors
    /// [`StorageError::Occupied`] if a value is already live.
    #[inline]
    pub fn emplace<T, I: Index>(&mut self, value: T) -> Result<(), StorageError>
    where
        L: IndexOf<T, I>,
    {
        self.raw.emplace(value)
    }

    /// Views the live value as `T` without checking the index.
    ///
    /// # Safety
    /// The live alternative must be `T`.
    #[inline]
    pub unsafe fn assume_ref<T>(&self) -> &T {
        // SAFETY: forwarded contract.
        unsafe { self.raw.assume_ref() }
    }

    /// Views the live value as `&mut T` without checking the index.
    ///
    /// # Safety
    /// The live alternative must be `T`.
    #[inline]
    pub unsafe fn assume_mut<T>(&mut self) -> &mut T {
        // SAFETY: forwarded contract.
        unsafe { self.raw.assume_mut() }
    }

    /// Drops the live value, if any, and marks the storage vacant.
    #[inline]
    pub fn destroy(&mut self) {
        self.raw.destroy();
    }

    /// Copies the buffer bytes and index into a new storage.
    #[inline]
    pub fn bitwise_copy(&self) -> Self
    where
        L: AllTriviallyCopyable,
    {
        Self::from_raw(self.raw.bitwise_copy())
    }
}

impl<L: DestroyDispatch + MoveConstructDispatch> VariantStorage<L> {
    /// Moves the live value into a new storage, leaving `self` vacant.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self::from_raw(self.raw.take())
    }
}

impl<L> VariantStorage<L>
where
    L: DestroyDispatch + MoveConstructDispatch + MoveAssignDispatch,
{
    /// Moves `source`'s value into `self`, leaving `source` vacant.
    ///
    /// See [`RawStorage::assign_from`].
    #[inline]
    pub fn assign_from(&mut self, source: &mut Self) {
        self.raw.assign_from(&mut source.raw);
    }
}

impl<L> Clone for VariantStorage<L>
where
    L: DestroyDispatch + CopyConstructDispatch + CopyAssignDispatch,
{
    fn clone(&self) -> Self {
        Self::from_raw(self.raw.clone_storage())
    }

    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_assign(&source.raw);
    }
}

impl<L: DestroyDispatch> Drop for VariantStorage<L> {
    fn drop(&mut self) {
        if L::ALL_TRIVIALLY_DESTRUCTIBLE {
            lifecycle_event!(L, self.raw.index, "releasing trivial storage");
            self.raw.index = INVALID;
        } else {
            self.raw.destroy();
        }
    }
}

impl<L: DestroyDispatch> Default for VariantStorage<L> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<L: DestroyDispatch> fmt::Debug for VariantStorage<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantStorage")
            .field("index", &self.raw.index)
            .field("alternative", &self.active_name())
            .field("strategy", &Self::STRATEGY)
            .finish()
    }
}
