// SPDX-License-Identifier: MIT

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;
use std::mem::{align_of, size_of};

mod arith;
mod bits;
mod compare;
mod construct;
mod format;

/**
 * @dev A signed 128-bit integer stored as two 64-bit machine words.
 * Uses two's complement representation, same as the native `i128`.
 *
 * Range: -2^127 to 2^127 - 1
 *
 * The value is immutable: every operation returns a new `Int128`.
 * Signed overflow wraps around silently, exactly like fixed-width hardware does.
 */
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Int128 {
    /// Most significant word, carries the sign (bits 64..128)
    high: i64,
    /// Least significant word, a plain bit pattern (bits 0..64)
    low: u64,
}

// The in-memory layout is two 8-byte words without padding
const_assert_eq!(size_of::<Int128>(), Int128::BYTES);
const_assert_eq!(size_of::<Int128>(), 16);
const_assert_eq!(align_of::<Int128>(), 8);

impl Int128 {
    /// Number of bytes in the two's complement form
    pub const BYTES: usize = 2 * size_of::<u64>();

    /// Number of bits in the two's complement form
    pub const BITS: u32 = (Self::BYTES * 8) as u32;

    /// Zero value
    pub const ZERO: Int128 = Int128::from_bits(0, 0);

    /// One
    pub const ONE: Int128 = Int128::from_bits(0, 1);

    /// Maximum value: 2^127 - 1
    pub const MAX_VALUE: Int128 = Int128::from_bits(0x7fff_ffff_ffff_ffff, 0xffff_ffff_ffff_ffff);

    /// Minimum value: -2^127. Has no positive counterpart.
    pub const MIN_VALUE: Int128 = Int128::from_bits(i64::MIN, 0);

    /**
     * @dev Creates a value from its raw words, `high` being the most significant one.
     */
    pub const fn from_bits(high: i64, low: u64) -> Self {
        Int128 { high, low }
    }

    pub const fn high_bits(&self) -> i64 {
        self.high
    }

    pub const fn low_bits(&self) -> u64 {
        self.low
    }

    pub const fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /**
     * @dev Checks if the value is negative (the sign bit 127 is set)
     */
    pub const fn is_negative(&self) -> bool {
        self.high < 0
    }

    /**
     * @dev Checks if the value fits into a signed 64-bit integer,
     * i.e. `high` is nothing but the sign extension of `low`.
     */
    pub const fn is_64bit(&self) -> bool {
        (self.high == 0 && (self.low as i64) >= 0) || (self.high == -1 && (self.low as i64) < 0)
    }
}
