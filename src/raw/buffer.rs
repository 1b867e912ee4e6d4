//! The aligned byte buffer behind every storage.

use core::fmt;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};

use crate::list::TypeList;

/// Uninterpreted bytes sized and aligned for any alternative of `L`.
///
/// The buffer owns no typed value. It is never zeroed and never read as a
/// whole; its contents mean whatever was last constructed into it, as
/// recorded by the owner's active index.
#[repr(transparent)]
pub struct AlignedBuffer<L: TypeList> {
    bytes: MaybeUninit<L::Layout>,
    _alternatives: PhantomData<L>,
}

impl<L: TypeList> AlignedBuffer<L> {
    /// Size of the buffer in bytes: `MAX_SIZE` rounded up to `MAX_ALIGN`.
    pub const SIZE: usize = mem::size_of::<L::Layout>();

    /// Alignment of the buffer: `MAX_ALIGN`.
    pub const ALIGN: usize = mem::align_of::<L::Layout>();

    /// A buffer with unspecified contents.
    #[inline]
    pub const fn uninit() -> Self {
        Self {
            bytes: MaybeUninit::uninit(),
            _alternatives: PhantomData,
        }
    }

    /// Address of the first byte.
    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr().cast::<u8>()
    }

    /// Mutable address of the first byte.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr().cast::<u8>()
    }
}

impl<L: TypeList> Default for AlignedBuffer<L> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<L: TypeList> fmt::Debug for AlignedBuffer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("size", &Self::SIZE)
            .field("align", &Self::ALIGN)
            .finish_non_exhaustive()
    }
}
