//! Kani proof harnesses
//!
//! Bounded proofs that the repair algorithms keep heap order for arbitrary
//! priorities. Run with `cargo kani --tests`.

#[cfg(kani)]
use pair_heap::{HeapError, MinHeap};

/// Proof: heap order holds after arbitrary insertions
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heap_order_after_insert() {
    let mut heap = MinHeap::with_capacity(4);
    for _ in 0..4 {
        assert!(heap.insert(kani::any(), kani::any()).is_ok());
    }
    assert!(heap.verify_heap_order());
    assert_eq!(
        heap.insert(kani::any(), kani::any()),
        Err(HeapError::CapacityExceeded { capacity: 4 })
    );
}

/// Proof: extraction returns the minimum priority and keeps heap order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_returns_minimum() {
    let p1: i32 = kani::any();
    let p2: i32 = kani::any();
    let p3: i32 = kani::any();

    let mut heap = MinHeap::with_capacity(3);
    heap.insert(1, p1).unwrap();
    heap.insert(2, p2).unwrap();
    heap.insert(3, p3).unwrap();

    let expected = p1.min(p2).min(p3);
    let pair = heap.extract_min_pair().unwrap();
    assert!(pair.priority == expected);
    assert!(heap.verify_heap_order());
    assert!(heap.len() == 2);
}

/// Proof: bulk-load heapifies any four priorities
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_heapify_establishes_order() {
    let priorities: [i32; 4] = kani::any();
    let elements: [i32; 4] = kani::any();

    let heap = MinHeap::from_parallel(&priorities, &elements, 4, 0).unwrap();
    assert!(heap.verify_heap_order());
    assert!(heap.capacity() == 4);
}

/// Proof: an empty heap never yields a value
#[cfg(kani)]
#[kani::proof]
fn verify_empty_extract_fails() {
    let mut heap = MinHeap::with_capacity(kani::any_where(|c: &usize| *c <= 4));
    assert!(heap.extract_min() == Err(HeapError::EmptyHeap));
    assert!(heap.peek_min() == Err(HeapError::EmptyHeap));
}
