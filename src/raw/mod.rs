//! Raw, untyped building blocks.
//!
//! This layer exposes minimal surface area and concentrates unsafe code in
//! [`access`]. Higher layers (`dispatch`, `storage`) never cast a buffer
//! address to a concrete type themselves; they call the audited helpers.
//!
//! This module does **not** make operations safe by itself. It provides
//! uniform building blocks whose safety conditions are documented and can be
//! audited in one place.

pub(crate) mod access;
pub mod buffer;

pub use buffer::AlignedBuffer;
