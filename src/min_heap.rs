//! Capacity-bounded binary min-heap of `(element, priority)` pairs
//!
//! The live entries form a complete binary tree laid out in array order: the
//! children of slot `i` are `2i + 1` and `2i + 2`, and every parent's priority
//! is no greater than its children's. The root therefore always holds the
//! minimum priority.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `extract_min`   | O(log n)   |
//! | `peek_min`      | O(1)       |
//! | `from_parallel` | O(n)       |
//! | `merged`        | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use pair_heap::MinHeap;
//!
//! let mut heap = MinHeap::from_parallel(&[5, 3, 8, 1], &[50, 30, 80, 10], 4, 2).unwrap();
//! assert_eq!(heap.capacity(), 6);
//! assert_eq!(heap.peek_min_priority(), Ok(1));
//! assert_eq!(heap.peek_min(), Ok(10));
//!
//! heap.insert(20, 2).unwrap();
//! assert_eq!(heap.extract_min(), Ok(10));
//! assert_eq!(heap.extract_min(), Ok(20));
//! ```

use log::{debug, trace};

use crate::config::{GrowthPolicy, HeapConfig, DEFAULT_CAPACITY};
use crate::error::{ConstructionError, HeapError};
use crate::pair::Pair;

/// Slots allocated by the first insertion into an empty heap
const MIN_RESERVE: usize = 4;

/// A binary min-heap of integer `(element, priority)` pairs
///
/// Capacity is declared up front. With the default [`GrowthPolicy::Fixed`],
/// inserting into a full heap fails with [`HeapError::CapacityExceeded`]
/// rather than reallocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHeap {
    /// Live prefix of the tree; `storage.len()` is the heap size
    storage: Vec<Pair>,
    capacity: usize,
    growth: GrowthPolicy,
}

impl MinHeap {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap holding at most `capacity` entries
    ///
    /// A zero capacity is valid; every insertion into such a heap fails.
    /// Nothing is allocated until the first insertion, so any `usize`
    /// capacity is accepted.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(HeapConfig::default().with_capacity(capacity))
    }

    /// Creates an empty heap from a [`HeapConfig`]
    pub fn with_config(config: HeapConfig) -> Self {
        Self {
            storage: Vec::new(),
            capacity: config.capacity,
            growth: config.growth,
        }
    }

    /// Bulk-loads `size` pairs from parallel slices and heapifies them
    ///
    /// Entry `i` is `(elements[i], priorities[i])`. The heap's capacity is
    /// `size + spare`. Entries past `size` in either slice are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::SourceTooShort`] if either slice holds
    /// fewer than `size` entries, and [`ConstructionError::CapacityOverflow`]
    /// if `size + spare` does not fit in `usize` or the `size` live entries
    /// cannot be allocated.
    pub fn from_parallel(
        priorities: &[i32],
        elements: &[i32],
        size: usize,
        spare: usize,
    ) -> Result<Self, HeapError> {
        if priorities.len() < size || elements.len() < size {
            let err = ConstructionError::SourceTooShort {
                expected: size,
                priorities: priorities.len(),
                elements: elements.len(),
            };
            debug!("rejecting bulk-load: {}", err);
            return Err(err.into());
        }

        let mut heap = Self::reserved(size, spare)?;
        heap.storage.extend(
            elements[..size]
                .iter()
                .zip(&priorities[..size])
                .map(|(&element, &priority)| Pair::new(element, priority)),
        );
        heap.heapify();

        debug!(
            "bulk-loaded heap with {} entries, capacity {}",
            heap.len(),
            heap.capacity
        );
        Ok(heap)
    }

    /// Builds a new heap holding the live entries of both sources
    ///
    /// The result has size `heap1.len() + heap2.len()` and that size plus
    /// `spare` as its capacity. Neither source is modified.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::CapacityOverflow`] if the combined
    /// capacity does not fit in `usize` or the live entries cannot be
    /// allocated.
    pub fn merged(heap1: &MinHeap, heap2: &MinHeap, spare: usize) -> Result<Self, HeapError> {
        let size = heap1
            .len()
            .checked_add(heap2.len())
            .ok_or(ConstructionError::CapacityOverflow)?;

        let mut heap = Self::reserved(size, spare)?;
        heap.storage.extend_from_slice(&heap1.storage);
        heap.storage.extend_from_slice(&heap2.storage);
        heap.heapify();

        debug!(
            "merged heaps of {} and {} entries, capacity {}",
            heap1.len(),
            heap2.len(),
            heap.capacity
        );
        Ok(heap)
    }

    /// Empty fixed-capacity heap accepting `size + spare` entries, with
    /// storage for the first `size` already allocated
    fn reserved(size: usize, spare: usize) -> Result<Self, HeapError> {
        let capacity = size.checked_add(spare).ok_or_else(|| {
            debug!("rejecting capacity {} + {}: overflow", size, spare);
            ConstructionError::CapacityOverflow
        })?;

        let mut storage = Vec::new();
        storage.try_reserve_exact(size).map_err(|_| {
            debug!("rejecting {} entries: allocation failed", size);
            ConstructionError::CapacityOverflow
        })?;

        Ok(Self {
            storage,
            capacity,
            growth: GrowthPolicy::Fixed,
        })
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns the maximum number of entries the heap currently accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns what `insert` does once the heap is full
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// Returns the minimum-priority pair without removing it
    pub fn peek(&self) -> Option<Pair> {
        self.storage.first().copied()
    }

    /// Returns the element with the minimum priority without removing it
    pub fn peek_min(&self) -> Result<i32, HeapError> {
        self.root().map(|pair| pair.element)
    }

    /// Returns the minimum priority without removing its entry
    pub fn peek_min_priority(&self) -> Result<i32, HeapError> {
        self.root().map(|pair| pair.priority)
    }

    fn root(&self) -> Result<&Pair, HeapError> {
        self.storage.first().ok_or(HeapError::EmptyHeap)
    }

    /// Inserts `element` with the given `priority`
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::CapacityExceeded`] when the heap is full and its
    /// growth policy is [`GrowthPolicy::Fixed`], and
    /// [`HeapError::AllocationFailed`] when storage for the new entry cannot
    /// be allocated. In both cases the heap is unchanged.
    pub fn insert(&mut self, element: i32, priority: i32) -> Result<(), HeapError> {
        let capacity = if self.storage.len() == self.capacity {
            self.grown_capacity()?
        } else {
            self.capacity
        };
        self.reserve_slot(capacity)?;

        if capacity != self.capacity {
            debug!("growing heap capacity {} -> {}", self.capacity, capacity);
            self.capacity = capacity;
        }

        self.storage.push(Pair::new(element, priority));
        self.trickle_up(self.storage.len() - 1);
        trace!("inserted <{}, {}>, size {}", element, priority, self.len());
        Ok(())
    }

    /// Capacity a full heap may move to under its growth policy
    fn grown_capacity(&self) -> Result<usize, HeapError> {
        self.growth.grow(self.capacity).ok_or_else(|| {
            debug!("rejecting insert: heap full at capacity {}", self.capacity);
            HeapError::CapacityExceeded {
                capacity: self.capacity,
            }
        })
    }

    /// Makes room for one more entry without allocating past `capacity`
    fn reserve_slot(&mut self, capacity: usize) -> Result<(), HeapError> {
        let len = self.storage.len();
        if len < self.storage.capacity() {
            return Ok(());
        }

        let additional = len.max(MIN_RESERVE).min(capacity - len);
        self.storage.try_reserve_exact(additional).map_err(|_| {
            debug!("rejecting insert: cannot allocate {} more slots", additional);
            HeapError::AllocationFailed {
                requested: len.saturating_add(additional),
            }
        })
    }

    /// Removes and returns the element with the minimum priority
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<i32, HeapError> {
        self.extract_min_pair().map(|pair| pair.element)
    }

    /// Removes and returns the minimum-priority pair
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to extract.
    pub fn extract_min_pair(&mut self) -> Result<Pair, HeapError> {
        if self.storage.is_empty() {
            debug!("rejecting extract: heap is empty");
            return Err(HeapError::EmptyHeap);
        }

        // The last live entry takes the root slot.
        let min = self.storage.swap_remove(0);
        self.trickle_down(0);
        trace!("extracted {}, size {}", min, self.len());
        Ok(min)
    }

    /// Returns true if every parent's priority is no greater than its children's
    pub fn verify_heap_order(&self) -> bool {
        (1..self.storage.len())
            .all(|i| self.storage[(i - 1) / 2].priority <= self.storage[i].priority)
    }

    /// Move the entry at `index` toward the root while it beats its parent
    fn trickle_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.storage[index].priority < self.storage[parent].priority {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `index` toward the leaves while a child beats it
    fn trickle_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len
                && self.storage[right].priority < self.storage[left].priority
            {
                right
            } else {
                left
            };

            if self.storage[index].priority > self.storage[child].priority {
                self.storage.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Establish heap order over the whole live prefix, bottom-up
    fn heapify(&mut self) {
        for index in (0..self.storage.len() / 2).rev() {
            self.trickle_down(index);
        }
    }
}

impl Default for MinHeap {
    fn default() -> Self {
        Self::new()
    }
}
