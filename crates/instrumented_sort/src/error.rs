//! Configuration errors raised before a sort touches its input.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("unknown gap strategy '{name}' (expected shell, hibbard, knuth or custom)")]
    InvalidStrategy { name: String },

    #[error("gap at position {index} is {value}; every gap must be positive")]
    InvalidGapSequence { index: usize, value: i64 },

    #[error("unknown sorting algorithm '{name}'")]
    InvalidAlgorithm { name: String },
}
