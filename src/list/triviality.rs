//! Aggregate triviality predicates.
//!
//! Destructibility and move-constructibility are answered by associated
//! constants on [`TypeList`]. Copy-constructibility cannot be read off a
//! type as a `const bool` on stable Rust, so it is expressed as a marker
//! trait: the set implements [`AllTriviallyCopyable`] exactly when every
//! alternative is `Copy`, and a set that does not is rejected wherever the
//! bound is required.

use super::{Cons, Nil, TypeList};

/// Every alternative of the set is `Copy`.
pub trait AllTriviallyCopyable: TypeList {
    /// Always `true` for implementors; absent impl is the `false` answer.
    const VALUE: bool = true;
}

impl AllTriviallyCopyable for Nil {}

impl<H: Copy, T: AllTriviallyCopyable> AllTriviallyCopyable for Cons<H, T> {}

/// `true` when no alternative of `L` needs drop glue.
#[inline]
pub const fn all_trivially_destructible<L: TypeList>() -> bool {
    L::ALL_TRIVIALLY_DESTRUCTIBLE
}

/// `true` when every alternative of `L` relocates with a byte copy.
#[inline]
pub const fn all_trivially_move_constructible<L: TypeList>() -> bool {
    L::ALL_TRIVIALLY_MOVE_CONSTRUCTIBLE
}
