//! Power-of-Two Heaps for Rust
//!
//! This crate provides an array-backed max-heap in which every node has a
//! configurable power-of-two number of children (`2^x`), generalizing the
//! conventional binary heap.
//!
//! # Features
//!
//! - **Configurable fanout**: 1, 2, 4, 8, ... children per node, fixed at construction
//! - **Max-heap**: `extract_max` always returns the largest element
//! - **Fallible API**: construction and extraction return [`HeapError`] instead of panicking
//! - **`verify` feature**: re-checks the whole heap invariant around every mutation
//!
//! # Example
//!
//! ```rust
//! use power_of_two_heap::{HeapError, PowerOfTwoHeap};
//!
//! let mut heap = PowerOfTwoHeap::new(3).unwrap(); // 8 children per node
//! heap.insert(5);
//! heap.insert(42);
//! heap.insert(17);
//!
//! assert_eq!(heap.extract_max(), Ok(42));
//! assert_eq!(heap.extract_max(), Ok(17));
//! assert_eq!(heap.extract_max(), Ok(5));
//! assert_eq!(heap.extract_max(), Err(HeapError::EmptyHeap));
//! ```

pub mod error;
pub mod fanout;
pub mod index;
pub mod power_of_two;

pub use error::HeapError;
pub use fanout::Fanout;
pub use power_of_two::PowerOfTwoHeap;
