//! Variant storage: one aligned buffer, one active index.
//!
//! The storage owns the buffer and the index; the dispatchers in
//! [`crate::dispatch`] do the typed work. Every transition below keeps the
//! invariant that a valid index means exactly that alternative is live:
//!
//! | Operation | Before | After |
//! |---|---|---|
//! | `emplace` | vacant | `index_of::<T>()` |
//! | `destroy` | any | vacant |
//! | `take` | `i` | source vacant, result `i` |
//! | `clone` | `i` | both `i` |
//! | `assign_from` | dst `j`, src `i` | dst `i`, src vacant |
//! | `clone_from` | dst `j`, src `i` | both `i` |
//!
//! Three teardown strategies are available; see [`Strategy`].

mod error;
mod raw_storage;
mod variant;


use serde::{Deserialize, Serialize};

pub use error::StorageError;
pub use raw_storage::RawStorage;
pub use variant::VariantStorage;

/// Active index meaning "no live alternative".
pub const INVALID: usize = usize::MAX;

/// How a storage type tears down its live value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Every alternative is trivially destructible; teardown only resets the index.
    AllTrivial,
    /// Teardown runs the destroy dispatcher for the live alternative.
    Dispatching,
    /// Teardown happens only through an explicit `destroy()` call.
    Manual,
}
