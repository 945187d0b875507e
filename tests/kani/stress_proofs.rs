//! Stress proofs for Kani verification
//!
//! These proofs run the same symbolic operation sequence against heaps of
//! different fanouts and check that they agree. The fanout changes the tree
//! shape but never which value comes out next, so any disagreement is a bug.

#[cfg(kani)]
use power_of_two_heap::PowerOfTwoHeap;

/// Perform `num_operations` symbolic operations on every heap and compare results
#[cfg(kani)]
fn verify_heaps_consistent(heaps: &mut [PowerOfTwoHeap<u32>], num_operations: usize) {
    for _ in 0..num_operations {
        if kani::any::<bool>() {
            let value = kani::any();
            for heap in heaps.iter_mut() {
                heap.insert(value);
            }
        } else {
            let expected = heaps[0].extract_max();
            for heap in heaps[1..].iter_mut() {
                assert_eq!(heap.extract_max(), expected);
            }
        }

        let len = heaps[0].len();
        let peek = heaps[0].peek().copied();
        for heap in heaps.iter() {
            assert_eq!(heap.len(), len);
            assert_eq!(heap.peek().copied(), peek);
        }
    }
}

/// Proof: Unary, binary and quaternary heaps agree on every operation
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_fanouts_agree() {
    let mut heaps = [
        PowerOfTwoHeap::new(0).unwrap(),
        PowerOfTwoHeap::new(1).unwrap(),
        PowerOfTwoHeap::new(2).unwrap(),
    ];
    verify_heaps_consistent(&mut heaps, 6);
}
