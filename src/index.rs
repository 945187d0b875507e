//! Index arithmetic for a complete `k`-ary tree stored breadth-first
//!
//! ```text
//! k = 4
//!                                0
//!          1            2               3              4
//!      5 6 7 8    9 10 11 12     13 14 15 16    17 18 19 20
//! ```
//!
//! - Up:          `(i - 1) / k`
//! - First child: `k * p + 1`
//! - Last child:  `k * p + k`
//!
//! The last level will often be incomplete, so child ranges are clipped to the
//! current length. Child positions are computed with checked arithmetic; a
//! position that does not fit `usize` can never be in range.

use std::ops::Range;

/// The parent node
///
/// ```
/// use power_of_two_heap::index::parent;
/// assert_eq!(parent(1, 2), 0);
/// assert_eq!(parent(2, 2), 0);
/// assert_eq!(parent(3, 2), 1);
/// assert_eq!(parent(4, 4), 0);
/// assert_eq!(parent(5, 4), 1);
/// assert_eq!(parent(20, 4), 4);
/// assert_eq!(parent(7, 1), 6);
/// ```
#[inline(always)]
#[must_use]
pub fn parent(i: usize, fanout: usize) -> usize {
    debug_assert!(i > 0, "The root has no parent");
    debug_assert!(fanout > 0);
    (i - 1) / fanout
}

/// The first child, if it is addressable at all
///
/// ```
/// use power_of_two_heap::index::first_child;
/// assert_eq!(first_child(0, 4), Some(1));
/// assert_eq!(first_child(1, 4), Some(5));
/// assert_eq!(first_child(3, 2), Some(7));
/// assert_eq!(first_child(2, 1usize << (usize::BITS - 1)), None);
/// ```
#[inline(always)]
#[must_use]
pub fn first_child(p: usize, fanout: usize) -> Option<usize> {
    fanout.checked_mul(p)?.checked_add(1)
}

/// The children of `p` that exist in a tree of `len` nodes
///
/// Empty when `p` is a leaf.
///
/// ```
/// use power_of_two_heap::index::children;
/// assert_eq!(children(0, 4, 10), 1..5);
/// assert_eq!(children(1, 4, 7), 5..7);
/// assert_eq!(children(2, 4, 7).len(), 0);
/// assert_eq!(children(0, 1usize << 40, 3), 1..3);
/// ```
#[inline]
#[must_use]
pub fn children(p: usize, fanout: usize, len: usize) -> Range<usize> {
    match first_child(p, fanout) {
        Some(first) if first < len => first..first.saturating_add(fanout).min(len),
        _ => 0..0,
    }
}
