//! Serializable layout descriptions of alternative sets.

use serde::{Deserialize, Serialize};

use crate::dispatch::DestroyDispatch;
use crate::raw::AlignedBuffer;
use crate::storage::{Strategy, VariantStorage};

/// Layout of a single alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeLayout {
    /// Position in the set.
    pub index: usize,
    /// `core::any::type_name` of the alternative.
    pub type_name: String,
    /// `size_of` in bytes.
    pub size: usize,
    /// `align_of` in bytes.
    pub align: usize,
    /// Whether the alternative has drop glue.
    pub needs_drop: bool,
}

/// Layout of a whole alternative set and the storage built over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Per-alternative layouts, in index order.
    pub alternatives: Vec<AlternativeLayout>,
    /// Largest alternative size.
    pub max_size: usize,
    /// Largest alternative alignment.
    pub max_align: usize,
    /// Size of the aligned buffer.
    pub buffer_size: usize,
    /// Alignment of the aligned buffer.
    pub buffer_align: usize,
    /// Teardown strategy of [`VariantStorage`] over this set.
    pub strategy: Strategy,
}

impl LayoutReport {
    /// Describes the alternative set `L`.
    pub fn of<L: DestroyDispatch>() -> Self {
        let alternatives = (0..L::LEN)
            .filter_map(|index| {
                let (size, align, needs_drop) = L::layout_at(index)?;
                Some(AlternativeLayout {
                    index,
                    type_name: L::name_at(index)?.to_owned(),
                    size,
                    align,
                    needs_drop,
                })
            })
            .collect();

        Self {
            alternatives,
            max_size: L::MAX_SIZE,
            max_align: L::MAX_ALIGN,
            buffer_size: AlignedBuffer::<L>::SIZE,
            buffer_align: AlignedBuffer::<L>::ALIGN,
            strategy: VariantStorage::<L>::STRATEGY,
        }
    }

    /// Number of alternatives described.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// `true` for the empty set.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Bytes of the buffer unused when the smallest alternative is live.
    pub fn worst_case_slack(&self) -> usize {
        self.alternatives
            .iter()
            .map(|alt| self.buffer_size - alt.size)
            .max()
            .unwrap_or(0)
    }
}
