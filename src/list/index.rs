//! Type-level positions into an alternative set.
//!
//! Positions are Peano numbers: [`Here`] is `0`, `There<I>` is `I + 1`.
//! They are usually inferred from the alternative type (see
//! [`IndexOf`](super::IndexOf)); the `I0..I7` aliases cover explicit use.

use core::marker::PhantomData;

/// A type-level position that knows its runtime value.
pub trait Index {
    /// The position as a runtime index.
    const VALUE: usize;
}

/// Position `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Here;

/// Position `I + 1`.
pub struct There<I>(PhantomData<fn() -> I>);

impl Index for Here {
    const VALUE: usize = 0;
}

impl<I: Index> Index for There<I> {
    const VALUE: usize = I::VALUE + 1;
}

/// Position 0.
pub type I0 = Here;
/// Position 1.
pub type I1 = There<I0>;
/// Position 2.
pub type I2 = There<I1>;
/// Position 3.
pub type I3 = There<I2>;
/// Position 4.
pub type I4 = There<I3>;
/// Position 5.
pub type I5 = There<I4>;
/// Position 6.
pub type I6 = There<I5>;
/// Position 7.
pub type I7 = There<I6>;
