//! Invariant proofs for `PowerOfTwoHeap`
//!
//! These proofs check, for symbolic values and small fanouts:
//! - The heap property after every insert and extraction
//! - That extraction returns the maximum
//! - That a failed extraction leaves the heap untouched

#[cfg(kani)]
use power_of_two_heap::index::parent;
#[cfg(kani)]
use power_of_two_heap::{HeapError, PowerOfTwoHeap};

#[cfg(kani)]
fn assert_heap_property(heap: &PowerOfTwoHeap<u32>) {
    let fanout = heap.fanout().get();
    let data = heap.snapshot();
    for i in 1..data.len() {
        assert!(data[parent(i, fanout)] >= data[i]);
    }
}

/// Proof: Insert keeps the heap property for any fanout exponent up to 3
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_keeps_heap_property() {
    let exponent: i32 = kani::any();
    kani::assume((0..=3).contains(&exponent));
    let mut heap = PowerOfTwoHeap::new(exponent).unwrap();

    heap.insert(kani::any());
    heap.insert(kani::any());
    heap.insert(kani::any());
    heap.insert(kani::any());

    assert_eq!(heap.len(), 4);
    assert_heap_property(&heap);
}

/// Proof: extract_max returns a value no smaller than anything left behind
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_returns_maximum() {
    let exponent: i32 = kani::any();
    kani::assume((0..=2).contains(&exponent));
    let mut heap = PowerOfTwoHeap::new(exponent).unwrap();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let d: u32 = kani::any();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);
    heap.insert(d);

    let max = heap.extract_max().unwrap();
    assert!(max >= a && max >= b && max >= c && max >= d);
    assert!(max == a || max == b || max == c || max == d);
    assert_eq!(heap.len(), 3);
    assert_heap_property(&heap);
    for value in heap.snapshot() {
        assert!(*value <= max);
    }
}

/// Proof: Extraction from an empty heap fails without changing anything
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_empty_extract_is_rejected() {
    let exponent = kani::any_where(|x: &i32| (0..=4).contains(x));
    let mut heap: PowerOfTwoHeap<u32> = PowerOfTwoHeap::new(exponent).unwrap();

    let value = kani::any();
    heap.insert(value);
    assert_eq!(heap.extract_max(), Ok(value));

    assert_eq!(heap.extract_max(), Err(HeapError::EmptyHeap));
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None);
}

/// Proof: Negative exponents never build a heap
#[cfg(kani)]
#[kani::proof]
fn verify_negative_exponent_rejected() {
    let exponent: i32 = kani::any();
    kani::assume(exponent < 0);
    assert_eq!(
        PowerOfTwoHeap::<u32>::new(exponent).unwrap_err(),
        HeapError::InvalidConfiguration { exponent }
    );
}
