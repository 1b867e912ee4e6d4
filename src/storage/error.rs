use core::fmt;

/// Contract violations caught by the checked storage operations.
///
/// The raw dispatchers never report errors; these are only produced where
/// the storage layer can verify a precondition cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// A value was offered for construction while another is live.
    Occupied {
        /// Index of the alternative currently occupying the buffer.
        active: usize,
    },
    /// An index outside `0..len` (and not `INVALID`) was recorded.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of alternatives in the set.
        len: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied { active } => {
                write!(f, "storage already holds alternative {active}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "alternative index {index} out of range for {len} alternatives")
            }
        }
    }
}

impl std::error::Error for StorageError {}
