// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;

use core::cmp::Ordering;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use super::construct::zero_or_minus_one;
use super::Int128;
use crate::error::ErrorCode;

/**
 * @dev Word-wise addition. The carry into `high` is detected from sign bits only:
 * - both `lo1` and `lo2` have the top bit set, or
 * - exactly one of them has it and the sum lost it (the sum rolled over 2^64).
 */
const fn add_words(hi1: i64, lo1: u64, hi2: i64, lo2: u64) -> Int128 {
    let lo_sum = lo1.wrapping_add(lo2);
    let carry = ((lo1 & lo2) as i64) < 0 || (((lo1 ^ lo2) as i64) < 0 && (lo_sum as i64) >= 0);
    let hi_sum = hi1.wrapping_add(hi2).wrapping_add(carry as i64);
    Int128::from_bits(hi_sum, lo_sum)
}

/// `a - b == a + (!b + 1)`. A zero `lo2` negates to zero without a borrow.
const fn subtract_words(hi1: i64, lo1: u64, hi2: i64, lo2: u64) -> Int128 {
    if lo2 == 0 {
        add_words(hi1, lo1, (!hi2).wrapping_add(1), 0)
    } else {
        add_words(hi1, lo1, !hi2, (!lo2).wrapping_add(1))
    }
}

/// `-x == !x + 1`. The increment only reaches `high` when `low` is zero.
const fn flip_sign(high: i64, low: u64) -> Int128 {
    if low == 0 {
        Int128::from_bits((!high).wrapping_add(1), 0)
    } else {
        Int128::from_bits(!high, !low + 1)
    }
}

/**
 * @dev Upper 64 bits of the full 128-bit product of two unsigned words,
 * assembled from 32-bit halves.
 */
pub(super) const fn unsigned_multiply_high(x: u64, y: u64) -> u64 {
    let (x_hi, x_lo) = (x >> 32, x & 0xffff_ffff);
    let (y_hi, y_lo) = (y >> 32, y & 0xffff_ffff);

    let lo_lo = x_lo * y_lo;
    let hi_lo = x_hi * y_lo;
    let lo_hi = x_lo * y_hi;
    let hi_hi = x_hi * y_hi;

    // At most (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1
    let cross = (lo_lo >> 32) + (hi_lo & 0xffff_ffff) + lo_hi;
    hi_hi + (hi_lo >> 32) + (cross >> 32)
}

/**
 * @dev 128x128 -> 128 multiplication modulo 2^128.
 * The `hi1 * hi2` term only affects bits above 128 and is dropped.
 */
const fn multiply_words(hi1: i64, lo1: u64, hi2: i64, lo2: u64) -> Int128 {
    let low = lo1.wrapping_mul(lo2);
    let high = (unsigned_multiply_high(lo1, lo2) as i64)
        .wrapping_add(hi1.wrapping_mul(lo2 as i64))
        .wrapping_add(hi2.wrapping_mul(lo1 as i64));
    Int128::from_bits(high, low)
}

/**
 * @dev Shift-and-subtract long division of unsigned 128-bit magnitudes.
 * Returns `(quotient, remainder)`. The divisor must be nonzero.
 *
 * Starts from the largest shift that can fit (the difference of leading zero counts)
 * and walks down to zero, subtracting `divisor << n` whenever it does not exceed what
 * is left of the dividend. At most 128 steps.
 */
fn divide_unsigned(dividend: Int128, divisor: Int128) -> (Int128, Int128) {
    if divisor == Int128::ONE {
        return (dividend, Int128::ZERO);
    }
    if dividend.high == 0 && divisor.high == 0 {
        return (
            Int128::from_u64(dividend.low / divisor.low),
            Int128::from_u64(dividend.low % divisor.low),
        );
    }
    if dividend.compare_unsigned(&divisor) == Ordering::Less {
        return (Int128::ZERO, dividend);
    }

    let mut quotient = Int128::ZERO;
    let mut remainder = dividend;
    let mut shift = divisor.number_of_leading_zeros() - dividend.number_of_leading_zeros();
    loop {
        let step = divisor.shift_left(shift as i32);
        if remainder.compare_unsigned(&step) != Ordering::Less {
            remainder = remainder.subtract(step);
            quotient = quotient.add(Int128::ONE.shift_left(shift as i32));
        }
        if shift == 0 {
            break;
        }
        shift -= 1;
    }
    (quotient, remainder)
}

impl Int128 {
    /**
     * @dev Two's complement negation.
     * Note: `MIN_VALUE.negate() == MIN_VALUE`, the classic asymmetry.
     */
    pub const fn negate(self) -> Self {
        flip_sign(self.high, self.low)
    }

    /**
     * @dev Returns the absolute value.
     * Note: `MIN_VALUE.abs() == MIN_VALUE`.
     */
    pub const fn abs(self) -> Self {
        if self.high >= 0 {
            self
        } else {
            self.negate()
        }
    }

    pub const fn increment(self) -> Self {
        if self.low == u64::MAX {
            Self::from_bits(self.high.wrapping_add(1), 0)
        } else {
            Self::from_bits(self.high, self.low + 1)
        }
    }

    pub const fn decrement(self) -> Self {
        if self.low == 0 {
            Self::from_bits(self.high.wrapping_sub(1), u64::MAX)
        } else {
            Self::from_bits(self.high, self.low - 1)
        }
    }

    /// Wrapping addition
    pub const fn add(self, other: Self) -> Self {
        add_words(self.high, self.low, other.high, other.low)
    }

    pub const fn add_i64(self, value: i64) -> Self {
        add_words(self.high, self.low, zero_or_minus_one(value), value as u64)
    }

    /// Wrapping subtraction
    pub const fn subtract(self, other: Self) -> Self {
        subtract_words(self.high, self.low, other.high, other.low)
    }

    pub const fn subtract_i64(self, value: i64) -> Self {
        // -i64::MIN does not fit into i64
        if value == i64::MIN {
            self.subtract(Self::from_i64(value))
        } else {
            self.add_i64(-value)
        }
    }

    /// Wrapping multiplication
    pub const fn multiply(self, other: Self) -> Self {
        multiply_words(self.high, self.low, other.high, other.low)
    }

    pub const fn multiply_i64(self, value: i64) -> Self {
        multiply_words(self.high, self.low, zero_or_minus_one(value), value as u64)
    }

    /**
     * @dev Truncating division together with the remainder.
     * The quotient rounds toward zero, the remainder takes the sign of the dividend,
     * so `self == quotient * other + remainder`. `MIN_VALUE / -1` wraps to `MIN_VALUE`.
     * Panics on division by zero: callers must check the divisor first.
     */
    pub fn div_rem(self, other: Self) -> (Self, Self) {
        assert!(!other.is_zero(), "Int128: division by zero");

        let dividend = self.abs();
        let divisor = other.abs();
        let (quotient, remainder) = if dividend.high == i64::MIN {
            // |MIN_VALUE| has no positive form: take one divisor off first
            let (quotient, remainder) = divide_unsigned(dividend.subtract(divisor), divisor);
            (quotient.increment(), remainder)
        } else {
            divide_unsigned(dividend, divisor)
        };

        let quotient = if self.is_negative() != other.is_negative() {
            quotient.negate()
        } else {
            quotient
        };
        let remainder = if self.is_negative() {
            remainder.negate()
        } else {
            remainder
        };
        (quotient, remainder)
    }

    pub fn divide(self, other: Self) -> Self {
        self.div_rem(other).0
    }

    pub fn remainder(self, other: Self) -> Self {
        self.div_rem(other).1
    }

    /**
     * @dev Checked division, returns Result instead of panicking
     */
    pub fn checked_divide(self, other: Self) -> Result<Self> {
        require!(!other.is_zero(), ErrorCode::DivisionByZero);
        Ok(self.divide(other))
    }

    /**
     * @dev Checked remainder, returns Result instead of panicking
     */
    pub fn checked_remainder(self, other: Self) -> Result<Self> {
        require!(!other.is_zero(), ErrorCode::DivisionByZero);
        Ok(self.remainder(other))
    }
}

impl Neg for Int128 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for Int128 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        add_words(self.high, self.low, other.high, other.low)
    }
}

impl Sub for Int128 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.subtract(other)
    }
}

impl Mul for Int128 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(other)
    }
}

impl Div for Int128 {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        self.divide(other)
    }
}

/**
 * @dev Remainder operator (%), same sign as the dividend
 */
impl Rem for Int128 {
    type Output = Self;

    fn rem(self, other: Self) -> Self::Output {
        self.remainder(other)
    }
}

impl AddAssign for Int128 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Int128 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign for Int128 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl DivAssign for Int128 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl RemAssign for Int128 {
    fn rem_assign(&mut self, other: Self) {
        *self = *self % other;
    }
}

impl Sum for Int128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl Product for Int128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |a, b| a * b)
    }
}
