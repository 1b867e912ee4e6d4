//! Index-driven lifecycle dispatch.
//!
//! Each dispatcher walks the alternative set head-first with a runtime
//! `index`. At `index == 0` it performs the typed operation for the head
//! alternative; otherwise it recurses into the tail with `index - 1`. The
//! empty set ([`Nil`](crate::list::Nil)) does nothing.
//!
//! ## Contract
//! - Callers must pass `index < L::LEN`. An index at or past the end walks
//!   off the set into the `Nil` case and silently does nothing. That path is
//!   reachable but never part of a valid call.
//! - The [`INVALID`](crate::storage::INVALID) sentinel is never passed
//!   through here; the storage layer checks for it first.
//! - Dispatchers never read or write an active index. Index bookkeeping
//!   belongs to the owner.
//! - Assignment dispatchers require both buffers to hold live values of the
//!   *same* alternative. Cross-alternative assignment is expressed by the
//!   owner as destroy followed by construct.
//! - Move dispatchers vacate the source: a moved-from Rust value is not
//!   live and must not be destroyed again.

mod assign;
mod construct;
mod destroy;

#[cfg(test)]
mod tests;

pub use assign::{CopyAssignDispatch, MoveAssignDispatch};
pub use construct::{CopyConstructDispatch, MoveConstructDispatch};
pub use destroy::DestroyDispatch;
