//! Lookups over an alternative set.
//!
//! Type-level lookups fail at compile time when they have no answer: asking
//! for position `3` of a three-element set, or the position of a type that
//! is not in the set, simply has no impl.
//!
//! ```compile_fail
//! use tagstore::alternatives;
//! use tagstore::list::{At, I3};
//!
//! type Set = alternatives![i32, f64, f32];
//! let _: At<Set, I3> = 0; // no fourth alternative
//! ```
//!
//! ```compile_fail
//! use tagstore::alternatives;
//! use tagstore::list::IndexOf;
//!
//! fn position<L: IndexOf<T, I>, T, I: tagstore::list::Index>() -> usize { L::INDEX }
//! let _ = position::<alternatives![i32, f64], String, _>();
//! ```

use core::any::TypeId;

use super::index::{Here, Index, There};
use super::{Cons, Nil, TypeList};

/// Selects the alternative at type-level position `I`.
pub trait TypeAt<I>: TypeList {
    /// The alternative stored at `I`.
    type Output;
}

impl<H, T: TypeList> TypeAt<Here> for Cons<H, T> {
    type Output = H;
}

impl<H, T: TypeAt<I>, I> TypeAt<There<I>> for Cons<H, T> {
    type Output = T::Output;
}

/// The alternative of `L` at position `I`.
pub type At<L, I> = <L as TypeAt<I>>::Output;

/// Proof that `T` is an alternative of the set, found at position `I`.
///
/// `I` is normally left for the compiler to infer. Inference only succeeds
/// when `T` occurs exactly once; a set listing `T` twice makes the position
/// ambiguous and the call fails to compile. Naming `I` explicitly still
/// selects a specific occurrence.
pub trait IndexOf<T, I: Index>: TypeList {
    /// Runtime value of the position.
    const INDEX: usize = I::VALUE;
}

impl<T, Tail: TypeList> IndexOf<T, Here> for Cons<T, Tail> {}

impl<T, H, Tail: IndexOf<T, I>, I: Index> IndexOf<T, There<I>> for Cons<H, Tail> {}

/// Runtime type-identity queries for sets of `'static` alternatives.
///
/// These mirror the type-level lookups with a boolean or optional answer
/// instead of a compile error.
pub trait TypeIdList: TypeList {
    /// Position of the first alternative whose `TypeId` is `id`.
    fn position_of(id: TypeId) -> Option<usize>;

    /// Appends every alternative's `TypeId`, head first.
    fn collect_ids(out: &mut Vec<TypeId>);

    /// Position of the first occurrence of `T`.
    #[inline]
    fn position<T: ?Sized + 'static>() -> Option<usize> {
        Self::position_of(TypeId::of::<T>())
    }

    /// `true` iff `T` occurs anywhere in the set.
    #[inline]
    fn contains<T: ?Sized + 'static>() -> bool {
        Self::position::<T>().is_some()
    }

    /// `true` if any type is listed more than once.
    fn has_duplicates() -> bool {
        let mut ids = Vec::with_capacity(Self::LEN);
        Self::collect_ids(&mut ids);
        ids.iter()
            .enumerate()
            .any(|(i, id)| ids[..i].contains(id))
    }
}

impl TypeIdList for Nil {
    #[inline]
    fn position_of(_id: TypeId) -> Option<usize> {
        None
    }

    #[inline]
    fn collect_ids(_out: &mut Vec<TypeId>) {}
}

impl<H: 'static, T: TypeIdList> TypeIdList for Cons<H, T> {
    #[inline]
    fn position_of(id: TypeId) -> Option<usize> {
        if TypeId::of::<H>() == id {
            Some(0)
        } else {
            T::position_of(id).map(|i| i + 1)
        }
    }

    fn collect_ids(out: &mut Vec<TypeId>) {
        out.push(TypeId::of::<H>());
        T::collect_ids(out);
    }
}
