//! Power-of-two max-heap
//!
//! A max-heap stored as a complete `k`-ary tree in a single `Vec`, where every
//! node has `k = 2^x` children and `x` is chosen at construction.
//!
//! Wider nodes make the tree shallower: inserts do fewer swaps on the way up,
//! while extractions compare up to `k` children per level on the way down.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity       |
//! |---------------|------------------|
//! | `insert`      | O(log_k n)       |
//! | `extract_max` | O(k · log_k n)   |
//! | `peek`        | O(1)             |
//!
//! # Example
//!
//! ```rust
//! use power_of_two_heap::PowerOfTwoHeap;
//!
//! // 2^2 = 4 children per node
//! let mut heap = PowerOfTwoHeap::new(2).unwrap();
//! for value in [10, 20, 5, 40, 30] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&40));
//! assert_eq!(heap.extract_max(), Ok(40));
//! assert_eq!(heap.extract_max(), Ok(30));
//! assert_eq!(heap.len(), 3);
//! ```

use crate::error::HeapError;
use crate::fanout::Fanout;
use crate::index;

/// A max-heap whose nodes have `2^x` children
///
/// Storage is breadth-first with the root at index 0, so for every
/// `0 < i < len` the element at `(i - 1) / k` is `>=` the element at `i`.
#[derive(Debug, Clone)]
pub struct PowerOfTwoHeap<T: Ord> {
    /// Implicit tree, breadth-first
    data: Vec<T>,
    fanout: Fanout,
}

impl<T: Ord> PowerOfTwoHeap<T> {
    /// Creates an empty heap with `2^exponent` children per node
    ///
    /// # Errors
    /// - [`HeapError::InvalidConfiguration`] if `exponent` is negative
    /// - [`HeapError::ConfigurationOverflow`] if `2^exponent` does not fit `usize`
    pub fn new(exponent: i32) -> Result<Self, HeapError> {
        Self::with_capacity(exponent, 0)
    }

    /// Like [`new`](Self::new), reserving room for `capacity` elements
    pub fn with_capacity(exponent: i32, capacity: usize) -> Result<Self, HeapError> {
        let fanout = Fanout::from_exponent(exponent)?;
        log::debug!("creating {fanout} heap with capacity {capacity}");
        Ok(Self {
            data: Vec::with_capacity(capacity),
            fanout,
        })
    }

    /// Creates an empty heap from an already validated fanout
    pub fn with_fanout(fanout: Fanout) -> Self {
        log::debug!("creating {fanout} heap");
        Self {
            data: Vec::new(),
            fanout,
        }
    }

    /// The number of children per node
    pub fn fanout(&self) -> Fanout {
        self.fanout
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the maximum without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Current storage in index order, root first
    ///
    /// Meant for diagnostics; the layout is only guaranteed to satisfy the
    /// heap property, not any particular order among siblings.
    pub fn snapshot(&self) -> &[T] {
        &self.data
    }

    /// Inserts a value
    ///
    /// The value is appended as the last leaf and bubbled up while it is
    /// strictly greater than its parent.
    pub fn insert(&mut self, value: T) {
        self.verify_heap();

        self.data.push(value);
        let index = self.sift_up(self.data.len() - 1);
        log::trace!("inserted at index {index} of {}", self.data.len());

        self.verify_heap();
    }

    /// Removes and returns the maximum
    ///
    /// The last leaf takes the root's place and is bubbled down towards its
    /// largest child (the first one on ties) while that child is strictly
    /// greater.
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if there is nothing to extract. The heap is
    /// left untouched.
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        self.verify_heap();

        let last = match self.data.pop() {
            Some(last) => last,
            None => {
                log::trace!("extract_max on an empty {} heap", self.fanout);
                return Err(HeapError::EmptyHeap);
            }
        };
        if self.data.is_empty() {
            return Ok(last);
        }

        let max = std::mem::replace(&mut self.data[0], last);
        let index = self.sift_down(0);
        log::trace!("root settled at index {index} of {}", self.data.len());

        self.verify_heap();
        Ok(max)
    }

    /// Move element at index up to maintain heap property
    ///
    /// Returns its new index.
    fn sift_up(&mut self, mut index: usize) -> usize {
        let fanout = self.fanout.get();
        while index > 0 {
            let parent = index::parent(index, fanout);
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move element at index down to maintain heap property
    ///
    /// Returns its new index.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let fanout = self.fanout.get();
        let len = self.data.len();
        loop {
            let mut largest = index;
            for child in index::children(index, fanout, len) {
                if self.data[child] > self.data[largest] {
                    largest = child;
                }
            }

            if largest != index {
                self.data.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
        index
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify_heap(&self) {}

    #[cfg(feature = "verify")]
    fn verify_heap(&self) {
        let fanout = self.fanout.get();
        for i in 1..self.data.len() {
            let p = index::parent(i, fanout);
            assert!(
                self.data[p] >= self.data[i],
                "Node[{p}] is smaller than its child [{i}] in a {} heap of len={}",
                self.fanout,
                self.data.len(),
            );
        }
    }
}

impl<T: Ord> Extend<T> for PowerOfTwoHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}
