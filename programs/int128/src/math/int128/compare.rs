// SPDX-License-Identifier: MIT

use core::cmp::{Ord, Ordering, PartialOrd};

use super::Int128;

impl Int128 {
    /**
     * @dev Compares the bit patterns as unsigned 128-bit magnitudes:
     * `high` as unsigned first, then `low` as unsigned.
     */
    pub fn compare_unsigned(&self, other: &Self) -> Ordering {
        (self.high as u64)
            .cmp(&(other.high as u64))
            .then(self.low.cmp(&other.low))
    }

    /**
     * @dev Returns -1, 0 or 1. With `high == 0` any nonzero `low` is positive.
     */
    pub const fn signum(&self) -> i32 {
        if self.high != 0 {
            self.high.signum() as i32
        } else if self.low == 0 {
            0
        } else {
            1
        }
    }
}

/**
 * @dev Partial ordering for signed integers
 */
impl PartialOrd for Int128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/**
 * @dev Total ordering for signed integers
 */
impl Ord for Int128 {
    fn cmp(&self, other: &Self) -> Ordering {
        // The sign lives in `high`; within equal `high` words a larger `low` pattern
        // is always the larger value, whatever its top bit is
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }
}

impl PartialEq<i64> for Int128 {
    fn eq(&self, other: &i64) -> bool {
        self.equals_i64(*other)
    }
}
