//! Compile-time alternative sets.
//!
//! An alternative set is an ordered, heterogeneous list of types built from
//! [`Cons`] cells terminated by [`Nil`]. Positions are assigned head-first,
//! starting at `0`. The [`alternatives!`](crate::alternatives) macro spells
//! the nesting for you:
//!
//! ```rust
//! use tagstore::alternatives;
//! use tagstore::list::{Cons, Nil, TypeList};
//!
//! type Set = alternatives![u8, String, f64];
//! let _: core::marker::PhantomData<Cons<u8, Cons<String, Cons<f64, Nil>>>> =
//!     core::marker::PhantomData::<Set>;
//! assert_eq!(Set::LEN, 3);
//! ```
//!
//! All queries here are answered by the type system or by associated
//! constants; nothing in this module carries runtime state.
//!
//! ## Layout
//! [`TypeList::Layout`] is a recursive `#[repr(C)]` union of `ManuallyDrop`
//! fields, one per alternative. Its size is `MAX_SIZE` rounded up to
//! `MAX_ALIGN`, and its alignment is exactly `MAX_ALIGN`. The raw buffer in
//! [`crate::raw`] wraps it in `MaybeUninit` and never reads it as a union.

pub mod index;
pub mod layout;
pub mod query;
pub mod triviality;


use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};

pub use index::{Here, Index, There, I0, I1, I2, I3, I4, I5, I6, I7};
pub use layout::{max_n, max_of, round_up};
pub use query::{At, IndexOf, TypeAt, TypeIdList};
pub use triviality::{
    all_trivially_destructible, all_trivially_move_constructible, AllTriviallyCopyable,
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nil {}
    impl<H, T: super::TypeList> Sealed for super::Cons<H, T> {}
}

/// The empty alternative set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// An alternative set whose first alternative is `H`, followed by the set `T`.
///
/// Never instantiated; it only exists at the type level.
pub struct Cons<H, T>(PhantomData<(fn() -> H, T)>);

/// Storage shape of a non-empty alternative set.
///
/// Only the size and alignment of this union are ever used.
#[repr(C)]
#[allow(dead_code)]
pub union UnionSlot<H, T> {
    head: ManuallyDrop<H>,
    tail: ManuallyDrop<T>,
}

/// An ordered list of alternative types.
///
/// Sealed: the only implementors are [`Nil`] and [`Cons`].
pub trait TypeList: sealed::Sealed {
    /// Union of every alternative, used purely for size and alignment.
    type Layout;

    /// Number of alternatives.
    const LEN: usize;

    /// `max(size_of::<T>())` over the set; `0` for the empty set.
    const MAX_SIZE: usize;

    /// `max(align_of::<T>())` over the set; `1` for the empty set.
    const MAX_ALIGN: usize;

    /// `true` when no alternative needs drop glue.
    const ALL_TRIVIALLY_DESTRUCTIBLE: bool;

    /// `true` when every alternative can be relocated by a byte copy.
    ///
    /// Every Rust move is a byte copy, so this folds to `true`.
    const ALL_TRIVIALLY_MOVE_CONSTRUCTIBLE: bool;

    /// `core::any::type_name` of the alternative at `index`.
    fn name_at(index: usize) -> Option<&'static str>;

    /// Size, alignment and drop-glue flag of the alternative at `index`.
    fn layout_at(index: usize) -> Option<(usize, usize, bool)>;
}

impl TypeList for Nil {
    type Layout = ();

    const LEN: usize = 0;
    const MAX_SIZE: usize = 0;
    const MAX_ALIGN: usize = 1;
    const ALL_TRIVIALLY_DESTRUCTIBLE: bool = true;
    const ALL_TRIVIALLY_MOVE_CONSTRUCTIBLE: bool = true;

    #[inline]
    fn name_at(_index: usize) -> Option<&'static str> {
        None
    }

    #[inline]
    fn layout_at(_index: usize) -> Option<(usize, usize, bool)> {
        None
    }
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    type Layout = UnionSlot<H, T::Layout>;

    const LEN: usize = 1 + T::LEN;
    const MAX_SIZE: usize = max_of(mem::size_of::<H>(), T::MAX_SIZE);
    const MAX_ALIGN: usize = max_of(mem::align_of::<H>(), T::MAX_ALIGN);
    const ALL_TRIVIALLY_DESTRUCTIBLE: bool =
        !mem::needs_drop::<H>() && T::ALL_TRIVIALLY_DESTRUCTIBLE;
    const ALL_TRIVIALLY_MOVE_CONSTRUCTIBLE: bool = T::ALL_TRIVIALLY_MOVE_CONSTRUCTIBLE;

    #[inline]
    fn name_at(index: usize) -> Option<&'static str> {
        if index == 0 {
            Some(core::any::type_name::<H>())
        } else {
            T::name_at(index - 1)
        }
    }

    #[inline]
    fn layout_at(index: usize) -> Option<(usize, usize, bool)> {
        if index == 0 {
            Some((mem::size_of::<H>(), mem::align_of::<H>(), mem::needs_drop::<H>()))
        } else {
            T::layout_at(index - 1)
        }
    }
}

/// Builds an alternative set type from a comma-separated list of types.
///
/// ```rust
/// use tagstore::alternatives;
/// use tagstore::list::TypeList;
///
/// type Empty = alternatives![];
/// type Three = alternatives![i32, char, f64,];
///
/// assert_eq!(Empty::LEN, 0);
/// assert_eq!(Three::LEN, 3);
/// ```
#[macro_export]
macro_rules! alternatives {
    () => { $crate::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::alternatives![$($tail),*]>
    };
}
