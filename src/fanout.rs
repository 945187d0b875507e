//! Fanout configuration
//!
//! A [`Fanout`] is the number of children each node of a
//! [`PowerOfTwoHeap`](crate::power_of_two::PowerOfTwoHeap) may have. It is
//! always `2^x` for some exponent `x`, validated once at construction so the
//! heap itself never has to re-check it.
//!
//! The accepted range is `0..=MAX_EXPONENT`, i.e. every exponent whose power of
//! two is representable as a `usize` index.

use std::fmt;

use crate::error::HeapError;

/// Largest accepted fanout exponent on this target
pub const MAX_EXPONENT: u32 = usize::BITS - 1;

/// Validated number of children per node, stored as its base-2 exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fanout {
    exponent: u32,
}

impl Fanout {
    /// Two children per node, the conventional binary heap
    pub const BINARY: Fanout = Fanout { exponent: 1 };

    /// Builds a fanout of `2^exponent` children per node
    ///
    /// # Errors
    /// - [`HeapError::InvalidConfiguration`] if `exponent` is negative
    /// - [`HeapError::ConfigurationOverflow`] if `exponent > MAX_EXPONENT`
    ///
    /// # Example
    ///
    /// ```rust
    /// use power_of_two_heap::fanout::Fanout;
    ///
    /// let fanout = Fanout::from_exponent(2).unwrap();
    /// assert_eq!(fanout.get(), 4);
    /// assert!(Fanout::from_exponent(-1).is_err());
    /// ```
    pub fn from_exponent(exponent: i32) -> Result<Self, HeapError> {
        if exponent < 0 {
            log::debug!("rejecting negative fanout exponent {exponent}");
            return Err(HeapError::InvalidConfiguration { exponent });
        }
        let exponent_bits = exponent as u32;
        if exponent_bits > MAX_EXPONENT {
            log::debug!("rejecting fanout exponent {exponent} above {MAX_EXPONENT}");
            return Err(HeapError::ConfigurationOverflow {
                exponent,
                max: MAX_EXPONENT,
            });
        }
        Ok(Self {
            exponent: exponent_bits,
        })
    }

    /// The exponent `x` of `2^x`
    pub const fn exponent(self) -> u32 {
        self.exponent
    }

    /// Number of children per node
    pub const fn get(self) -> usize {
        1usize << self.exponent
    }
}

impl TryFrom<i32> for Fanout {
    type Error = HeapError;

    fn try_from(exponent: i32) -> Result<Self, Self::Error> {
        Self::from_exponent(exponent)
    }
}

impl Default for Fanout {
    fn default() -> Self {
        Self::BINARY
    }
}

impl fmt::Display for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-ary (2^{})", self.get(), self.exponent)
    }
}
