//! Capacity-bounded binary min-heap of integer pairs
//!
//! This crate provides [`MinHeap`], an array-backed binary heap storing
//! `(element, priority)` pairs of `i32` and always yielding the element with
//! the minimum priority first.
//!
//! # Features
//!
//! - **Bulk-load**: build a heap from parallel priority/element slices in O(n)
//! - **Merge**: build a new heap from two existing ones without touching them
//! - **Explicit failures**: a full heap, an empty heap, or bad constructor
//!   arguments all surface as [`HeapError`] instead of sentinel values
//! - **Growth policy**: fixed capacity by default, amortized doubling on request
//!
//! # Example
//!
//! ```rust
//! use pair_heap::{HeapError, MinHeap};
//!
//! let mut heap = MinHeap::with_capacity(2);
//! heap.insert(7, 2).unwrap();
//! heap.insert(9, 1).unwrap();
//! assert_eq!(heap.insert(11, 0), Err(HeapError::CapacityExceeded { capacity: 2 }));
//!
//! assert_eq!(heap.peek_min(), Ok(9));
//! assert_eq!(heap.extract_min(), Ok(9));
//! assert_eq!(heap.extract_min(), Ok(7));
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
//! ```

pub mod config;
pub mod error;
pub mod min_heap;
pub mod pair;

pub use config::{GrowthPolicy, HeapConfig, DEFAULT_CAPACITY};
pub use error::{ConstructionError, HeapError};
pub use min_heap::MinHeap;
pub use pair::Pair;
