//! The `(element, priority)` entry stored in each heap slot

use std::fmt;

/// A single heap entry
///
/// Pairs are plain values with no identity beyond their position in the heap.
/// Ordering inside the heap is by `priority` only; `element` is payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair {
    /// Payload returned by extraction
    pub element: i32,
    /// Ordering key; smaller priorities leave the heap first
    pub priority: i32,
}

impl Pair {
    /// Creates a pair from its payload and ordering key
    pub const fn new(element: i32, priority: i32) -> Self {
        Self { element, priority }
    }
}

impl From<(i32, i32)> for Pair {
    /// Builds a pair from `(element, priority)`
    fn from((element, priority): (i32, i32)) -> Self {
        Self::new(element, priority)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.element, self.priority)
    }
}
