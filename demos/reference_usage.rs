//! Reference usage of a 4-ary heap
//!
//! ## Running
//!
//! ```bash
//! cargo run --example reference_usage
//! ```

use power_of_two_heap::{HeapError, PowerOfTwoHeap};

fn main() -> Result<(), HeapError> {
    // 4 children per node (2^2)
    let mut heap = PowerOfTwoHeap::new(2)?;

    heap.insert(10);
    heap.insert(20);
    heap.insert(5);
    heap.insert(40);
    heap.insert(30);

    println!("{} heap after inserts: {:?}", heap.fanout(), heap.snapshot());

    let max = heap.extract_max()?;
    println!("Max value: {max}");
    println!("Heap after extract_max: {:?}", heap.snapshot());

    Ok(())
}
