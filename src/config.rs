//! Heap configuration
//!
//! A [`MinHeap`](crate::MinHeap) is capacity-bounded: by default an insertion
//! into a full heap fails with
//! [`HeapError::CapacityExceeded`](crate::HeapError::CapacityExceeded).
//! [`GrowthPolicy::Doubling`] opts into amortized growth instead.
//!
//! # Example
//!
//! ```rust
//! use pair_heap::{GrowthPolicy, HeapConfig, MinHeap};
//!
//! let config = HeapConfig::default()
//!     .with_capacity(1)
//!     .with_growth(GrowthPolicy::Doubling);
//! let mut heap = MinHeap::with_config(config);
//! heap.insert(10, 2).unwrap();
//! heap.insert(20, 1).unwrap();
//! assert_eq!(heap.capacity(), 2);
//! assert_eq!(heap.peek_min(), Ok(20));
//! ```

/// Capacity of a heap built with [`MinHeap::new`](crate::MinHeap::new)
pub const DEFAULT_CAPACITY: usize = 10;

/// What an insertion does when the heap is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Reject the insertion with `CapacityExceeded`
    #[default]
    Fixed,
    /// Double the capacity (at least to 1), then insert
    Doubling,
}

impl GrowthPolicy {
    /// Capacity to grow to from `current`, or `None` if the heap must stay full
    pub(crate) fn grow(self, current: usize) -> Option<usize> {
        match self {
            GrowthPolicy::Fixed => None,
            GrowthPolicy::Doubling => {
                let next = current.saturating_mul(2).max(1);
                (next > current).then_some(next)
            }
        }
    }
}

/// Construction parameters for an empty heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Initial capacity
    pub capacity: usize,
    /// Behavior of `insert` on a full heap
    pub growth: GrowthPolicy,
}

impl HeapConfig {
    /// Sets the initial capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the behavior of `insert` on a full heap
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::Fixed,
        }
    }
}
