//! Error types for heap operations
//!
//! Every fallible operation on [`MinHeap`](crate::MinHeap) reports failure
//! through [`HeapError`]. Checks run before any mutation, so a returned error
//! always leaves the heap exactly as it was before the call.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Insertion attempted on a full heap with a fixed capacity
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded {
        /// The capacity that was reached
        capacity: usize,
    },
    /// Storage for a new entry could not be allocated
    #[error("cannot allocate storage for {requested} entries")]
    AllocationFailed {
        /// Total number of slots the failed reservation asked for
        requested: usize,
    },
    /// Peek or extraction attempted on an empty heap
    #[error("heap is empty")]
    EmptyHeap,
    /// A constructor was given arguments that cannot describe a valid heap
    #[error("invalid construction arguments: {0}")]
    InvalidConstructionArgs(#[from] ConstructionError),
}

/// Reasons a constructor rejects its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// Bulk-load sources hold fewer entries than the requested size
    #[error(
        "bulk-load needs {expected} entries, got {priorities} priorities and {elements} elements"
    )]
    SourceTooShort {
        /// Requested heap size
        expected: usize,
        /// Length of the priority source
        priorities: usize,
        /// Length of the element source
        elements: usize,
    },
    /// Size plus spare capacity does not fit in `usize`, or cannot be allocated
    #[error("requested capacity overflows")]
    CapacityOverflow,
}
