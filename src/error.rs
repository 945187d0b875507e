//! Error type for heap construction and extraction

use thiserror::Error;

/// Error type for heap operations
///
/// Every fallible operation rejects before mutating anything, so a heap that
/// returned one of these is still in the state it was in before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The fanout exponent is negative
    #[error("fanout exponent {exponent} is negative")]
    InvalidConfiguration {
        /// The rejected exponent
        exponent: i32,
    },
    /// `2^exponent` does not fit the index type
    #[error("fanout exponent {exponent} exceeds the maximum of {max}")]
    ConfigurationOverflow {
        /// The rejected exponent
        exponent: i32,
        /// Largest accepted exponent on this target
        max: u32,
    },
    /// Extraction was attempted on a heap with no elements
    #[error("cannot extract the maximum of an empty heap")]
    EmptyHeap,
}
