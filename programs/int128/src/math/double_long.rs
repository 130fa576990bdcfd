// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use super::int128::Int128;

/**
 * @dev A 128-bit signed value with a reduced operation set.
 * It shares the `Int128` representation and forwards every operation to it,
 * so both types always agree bit for bit.
 */
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Pod, Zeroable)]
pub struct DoubleLong(Int128);

impl DoubleLong {
    pub const ZERO: DoubleLong = DoubleLong(Int128::ZERO);
    pub const ONE: DoubleLong = DoubleLong(Int128::ONE);
    pub const MAX_VALUE: DoubleLong = DoubleLong(Int128::MAX_VALUE);
    pub const MIN_VALUE: DoubleLong = DoubleLong(Int128::MIN_VALUE);

    pub const fn from_bits(high: i64, low: u64) -> Self {
        DoubleLong(Int128::from_bits(high, low))
    }

    pub const fn from_i64(value: i64) -> Self {
        DoubleLong(Int128::from_i64(value))
    }

    /// Base-10 parse, panics on malformed input
    pub fn from_decimal(value: &str) -> Self {
        DoubleLong(Int128::from_decimal(value))
    }

    pub fn from_hex(value: &str) -> Self {
        DoubleLong(Int128::from_hex(value))
    }

    pub fn try_from_hex(value: &str) -> Result<Self> {
        Int128::try_from_hex(value).map(DoubleLong)
    }

    pub const fn high_bits(&self) -> i64 {
        self.0.high_bits()
    }

    pub const fn low_bits(&self) -> u64 {
        self.0.low_bits()
    }

    pub const fn as_int128(&self) -> Int128 {
        self.0
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    pub const fn signum(&self) -> i32 {
        self.0.signum()
    }

    pub const fn add(self, other: Self) -> Self {
        DoubleLong(self.0.add(other.0))
    }

    pub const fn subtract(self, other: Self) -> Self {
        DoubleLong(self.0.subtract(other.0))
    }

    pub const fn multiply(self, other: Self) -> Self {
        DoubleLong(self.0.multiply(other.0))
    }

    /// Truncating division; panics on a zero divisor
    pub fn divide(self, other: Self) -> Self {
        DoubleLong(self.0.divide(other.0))
    }

    pub const fn negate(self) -> Self {
        DoubleLong(self.0.negate())
    }

    pub const fn and(self, other: Self) -> Self {
        DoubleLong(self.0.and(other.0))
    }

    pub const fn or(self, other: Self) -> Self {
        DoubleLong(self.0.or(other.0))
    }

    pub const fn xor(self, other: Self) -> Self {
        DoubleLong(self.0.xor(other.0))
    }

    /// True when the value is representable as an `i64`
    pub const fn fits_into_long(&self) -> bool {
        self.0.is_64bit()
    }

    pub fn to_binary_string(&self) -> String {
        self.0.to_binary_string()
    }

    pub fn to_hex_string(&self) -> String {
        self.0.to_hex_string()
    }
}

impl From<Int128> for DoubleLong {
    fn from(value: Int128) -> Self {
        DoubleLong(value)
    }
}

impl From<DoubleLong> for Int128 {
    fn from(value: DoubleLong) -> Self {
        value.0
    }
}

impl From<i64> for DoubleLong {
    fn from(value: i64) -> Self {
        DoubleLong::from_i64(value)
    }
}

impl FromStr for DoubleLong {
    type Err = anchor_lang::error::Error;

    fn from_str(value: &str) -> Result<Self> {
        Int128::try_from_decimal(value).map(DoubleLong)
    }
}

impl fmt::Display for DoubleLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for DoubleLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoubleLong({})", self.0)
    }
}
