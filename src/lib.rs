//! # `tagstore` - Tagged-Union Storage Engine
//!
//! A hand-built tagged-union storage engine. Given a compile-time set of
//! alternative types, it provides one raw memory block sized and aligned for
//! any of them, a runtime "active alternative" index, and index-driven
//! lifecycle operations (destroy, copy-construct, move-construct,
//! copy-assign, move-assign) that act on whichever alternative is live.
//!
//! ## Safety Guarantees
//!
//! ### Memory Safety
//! - **Centralized unsafe**: every reinterpretation of buffer bytes as a
//!   concrete type goes through the audited helpers in `raw::access`.
//! - **Index as the single source of truth**: the engine never inspects
//!   buffer bytes to decide what is live. A valid index means exactly that
//!   alternative is live; [`INVALID`] means nothing is.
//! - **Checked owner surface**: [`VariantStorage`] and [`RawStorage`] keep the
//!   index consistent across every transition. The raw dispatchers keep the
//!   bare "trust the caller" contract.
//!
//! ### Compile-Time Guarantees
//! - **Type-level lookups**: asking for an alternative position or type that
//!   is not in the set has no impl and fails to build.
//! - **Layout folding**: size and alignment maxima are associated constants,
//!   checked below with `const` assertions.
//! - **Strategy selection**: the teardown path of [`VariantStorage`] is fixed
//!   per alternative set by `TypeList::ALL_TRIVIALLY_DESTRUCTIBLE`.
//!
//! ## Architecture
//!
//! 1. **Alternative sets** ([`list`]): `Cons`/`Nil` type lists with
//!    `TypeAt`, `IndexOf`, `TypeIdList`, size/alignment folds and triviality
//!    predicates.
//! 2. **Aligned buffer** ([`raw`]): `AlignedBuffer<L>`, uninterpreted bytes.
//! 3. **Dispatchers** ([`dispatch`]): five recursive traits over the set.
//! 4. **Storage** ([`storage`]): buffer + index, with `AllTrivial`,
//!    `Dispatching` and `Manual` teardown.
//! 5. **Reports** ([`report`]): serializable layout descriptions.
//!
//! ## Example
//!
//! ```rust
//! use tagstore::{alternatives, Strategy, VariantStorage};
//!
//! type Value = alternatives![i64, String, Vec<u8>];
//!
//! let mut a = VariantStorage::<Value>::with(String::from("tag"));
//! assert_eq!(a.index(), 1);
//! assert_eq!(a.strategy(), Strategy::Dispatching);
//!
//! let mut b = VariantStorage::<Value>::with(42i64);
//! b.assign_from(&mut a);
//! assert!(a.is_vacant());
//! assert_eq!(unsafe { b.assume_ref::<String>() }, "tag");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod dispatch;
pub mod list;
pub mod raw;
pub mod report;
pub mod storage;

pub use dispatch::{
    CopyAssignDispatch, CopyConstructDispatch, DestroyDispatch, MoveAssignDispatch,
    MoveConstructDispatch,
};
pub use list::{Cons, IndexOf, Nil, TypeAt, TypeIdList, TypeList};
pub use raw::AlignedBuffer;
pub use report::{AlternativeLayout, LayoutReport};
pub use storage::{RawStorage, StorageError, Strategy, VariantStorage, INVALID};

// Compile-time assertions for layout folding and buffer shape.
const _: () = {
    use core::mem;

    type Mixed = alternatives![i32, char, f64];
    assert!(<Mixed as TypeList>::MAX_SIZE == mem::size_of::<f64>());
    assert!(<Mixed as TypeList>::MAX_ALIGN == mem::align_of::<f64>());
    assert!(<Mixed as TypeList>::LEN == 3);

    // The buffer is exactly as large as its union layout, with no header.
    assert!(AlignedBuffer::<Mixed>::SIZE == mem::size_of::<AlignedBuffer<Mixed>>());
    assert!(AlignedBuffer::<Mixed>::ALIGN == <Mixed as TypeList>::MAX_ALIGN);

    // Storage is the buffer plus one index word (plus padding).
    assert!(
        mem::size_of::<RawStorage<Mixed>>()
            <= AlignedBuffer::<Mixed>::SIZE + mem::size_of::<usize>() * 2
    );
    assert!(mem::size_of::<VariantStorage<Mixed>>() == mem::size_of::<RawStorage<Mixed>>());

    assert!(<alternatives![i32, f32] as TypeList>::ALL_TRIVIALLY_DESTRUCTIBLE);
    assert!(!<alternatives![String, i32] as TypeList>::ALL_TRIVIALLY_DESTRUCTIBLE);
};
