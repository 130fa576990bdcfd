// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use primitive_types::U128;

use core::str::FromStr;

use super::Int128;
use crate::error::ErrorCode;

/// Branch-free form of `if test < 0 { -1 } else { 0 }`.
/// Relies on `>>` being an arithmetic shift for `i64`.
#[inline]
pub(super) const fn zero_or_minus_one(test: i64) -> i64 {
    test >> 63
}

#[inline]
const fn ints_to_long(high: i32, low: i32) -> i64 {
    ((high as i64) << 32) | (low as u32 as i64)
}

/**
 * @dev Pads the minimal big-endian two's complement form to exactly 16 bytes.
 * The padding replicates the sign, so negative values are filled with 0xFF.
 * Longer inputs keep their 16 least significant bytes.
 */
fn resize_preserving_sign(bytes: &[u8]) -> [u8; Int128::BYTES] {
    let negative = bytes.first().map_or(false, |first| first & 0x80 != 0);
    let mut resized = [if negative { 0xFF } else { 0x00 }; Int128::BYTES];
    if bytes.len() >= Int128::BYTES {
        resized.copy_from_slice(&bytes[bytes.len() - Int128::BYTES..]);
    } else {
        resized[Int128::BYTES - bytes.len()..].copy_from_slice(bytes);
    }
    resized
}

/// `[+-]?[0-9]+`, no separators or whitespace
fn is_decimal_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Int128 {
    /* Bit-level construction */

    /**
     * @dev Creates a value from 16 big-endian bytes (`high` in bytes 0..8, `low` in bytes 8..16).
     */
    pub fn from_be_bytes(bytes: [u8; Int128::BYTES]) -> Self {
        let mut high = [0u8; 8];
        let mut low = [0u8; 8];
        high.copy_from_slice(&bytes[..8]);
        low.copy_from_slice(&bytes[8..]);
        Self::from_bits(i64::from_be_bytes(high), u64::from_be_bytes(low))
    }

    /// `{high, low}`
    pub const fn from_longs(longs: [i64; 2]) -> Self {
        Self::from_bits(longs[0], longs[1] as u64)
    }

    /// `{highHi32, highLo32, lowHi32, lowLo32}`
    pub const fn from_ints(ints: [i32; 4]) -> Self {
        Self::from_bits(ints_to_long(ints[0], ints[1]), ints_to_long(ints[2], ints[3]) as u64)
    }

    /**
     * @dev Creates a value from a big-endian byte slice.
     * Panics unless the slice holds exactly 16 bytes.
     */
    pub fn from_byte_array(bytes: &[u8]) -> Self {
        assert!(
            bytes.len() == Self::BYTES,
            "Int128: invalid byte array length: expected={}, actual={}",
            Self::BYTES,
            bytes.len()
        );
        let mut buf = [0u8; Int128::BYTES];
        buf.copy_from_slice(bytes);
        Self::from_be_bytes(buf)
    }

    /**
     * @dev Creates a value from `{high, low}`. Panics unless the slice holds exactly 2 words.
     */
    pub fn from_long_array(longs: &[i64]) -> Self {
        assert!(
            longs.len() == 2,
            "Int128: invalid long array length: expected=2, actual={}",
            longs.len()
        );
        Self::from_longs([longs[0], longs[1]])
    }

    /**
     * @dev Creates a value from four 32-bit halves, most significant first.
     * Panics unless the slice holds exactly 4 words.
     */
    pub fn from_int_array(ints: &[i32]) -> Self {
        assert!(
            ints.len() == 4,
            "Int128: invalid int array length: expected=4, actual={}",
            ints.len()
        );
        Self::from_ints([ints[0], ints[1], ints[2], ints[3]])
    }

    /**
     * @dev Checked version of `from_byte_array`, returns Result instead of panicking
     */
    pub fn try_from_byte_array(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            msg!("Int128: rejected byte array of length {}", bytes.len());
        }
        require!(bytes.len() == Self::BYTES, ErrorCode::InvalidArrayLength);
        Ok(Self::from_byte_array(bytes))
    }

    pub fn try_from_long_array(longs: &[i64]) -> Result<Self> {
        if longs.len() != 2 {
            msg!("Int128: rejected long array of length {}", longs.len());
        }
        require!(longs.len() == 2, ErrorCode::InvalidArrayLength);
        Ok(Self::from_long_array(longs))
    }

    pub fn try_from_int_array(ints: &[i32]) -> Result<Self> {
        if ints.len() != 4 {
            msg!("Int128: rejected int array of length {}", ints.len());
        }
        require!(ints.len() == 4, ErrorCode::InvalidArrayLength);
        Ok(Self::from_int_array(ints))
    }

    /* Native numbers */

    /**
     * @dev Sign-extends a 64-bit integer: `high` becomes 0 or -1 depending on the sign.
     */
    pub const fn from_i64(value: i64) -> Self {
        Self::from_bits(zero_or_minus_one(value), value as u64)
    }

    /**
     * @dev Zero-extends an unsigned 64-bit integer
     */
    pub const fn from_u64(value: u64) -> Self {
        Self::from_bits(0, value)
    }

    /**
     * @dev Converts through the IEEE-754 bit layout: the 52-bit mantissa with its implicit
     * leading bit is shifted by `exponent - 1075`, then negated if the sign bit is set.
     * The fraction is truncated toward zero. Magnitudes beyond 128 bits (including
     * infinities and NaN) keep only their 128 least significant bits.
     */
    pub fn from_f64(value: f64) -> Self {
        let bits = value.to_bits() as i64;
        let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
        let mantissa = (bits & ((1i64 << 52) - 1)) | (1i64 << 52);
        let magnitude = Self::from_i64(mantissa).shift_left(exponent);
        if bits < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }

    /* Arbitrary precision */

    /**
     * @dev Narrows an arbitrary-precision integer to 128 bits.
     * Its minimal two's complement form is sign-extended (not zero-padded) to 16 bytes.
     */
    pub fn from_big_int(value: &BigInt) -> Self {
        Self::from_be_bytes(resize_preserving_sign(&value.to_signed_bytes_be()))
    }

    /**
     * @dev Parses an optionally signed base-10 string. Panics on malformed input.
     */
    pub fn from_decimal(value: &str) -> Self {
        match Self::try_from_decimal(value) {
            Ok(result) => result,
            Err(err) => panic!("Int128: invalid decimal string {:?}: {}", value, err),
        }
    }

    pub fn try_from_decimal(value: &str) -> Result<Self> {
        let parsed = if is_decimal_literal(value) {
            BigInt::from_str(value).ok()
        } else {
            None
        };
        match parsed {
            Some(parsed) => Ok(Self::from_big_int(&parsed)),
            None => {
                msg!("Int128: rejected decimal string {:?}", value);
                err!(ErrorCode::InvalidDecimalString)
            }
        }
    }

    /**
     * @dev Parses a hex string: optional `-`, `0x` or `-0x` prefix, `_` separators allowed,
     * case-insensitive digits. Panics on malformed input.
     */
    pub fn from_hex(value: &str) -> Self {
        match Self::try_from_hex(value) {
            Ok(result) => result,
            Err(err) => panic!("Int128: invalid hex string {:?}: {}", value, err),
        }
    }

    /**
     * @dev Checked version of `from_hex`.
     * Digits are consumed from the right: nibbles 0..16 go to `low`, 16..32 to `high`.
     * Extra leading zeros are accepted, extra significant digits are not.
     */
    pub fn try_from_hex(value: &str) -> Result<Self> {
        let (minus, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let digits = digits.strip_prefix("0x").unwrap_or(digits);

        let mut high = 0u64;
        let mut low = 0u64;
        let mut nibble = 0u32;
        for ch in digits.chars().rev() {
            if ch == '_' {
                continue;
            }
            let Some(digit) = ch.to_digit(16) else {
                msg!("Int128: invalid hex character {:?} in {:?}", ch, value);
                return err!(ErrorCode::InvalidHexCharacter);
            };
            match nibble {
                0..=15 => low |= (digit as u64) << (nibble * 4),
                16..=31 => high |= (digit as u64) << ((nibble - 16) * 4),
                _ => {
                    if digit != 0 {
                        msg!("Int128: hex string {:?} exceeds 128 bits", value);
                    }
                    require!(digit == 0, ErrorCode::HexOverflow);
                }
            }
            nibble = nibble.saturating_add(1);
        }

        let result = Self::from_bits(high as i64, low);
        Ok(if minus { result.negate() } else { result })
    }

    /* Bit-level conversions */

    pub fn to_byte_array(&self) -> [u8; Int128::BYTES] {
        let mut bytes = [0u8; Int128::BYTES];
        bytes[..8].copy_from_slice(&self.high.to_be_bytes());
        bytes[8..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }

    pub const fn to_long_array(&self) -> [i64; 2] {
        [self.high, self.low as i64]
    }

    pub const fn to_int_array(&self) -> [i32; 4] {
        [
            (self.high >> 32) as i32,
            self.high as i32,
            (self.low >> 32) as i32,
            self.low as i32,
        ]
    }

    pub fn to_big_int(&self) -> BigInt {
        BigInt::from_signed_bytes_be(&self.to_byte_array())
    }

    /**
     * @dev Creates a value from the raw two's complement bit pattern held in a `U128`
     */
    pub fn from_raw(value: U128) -> Self {
        let U128([low, high]) = value;
        Self::from_bits(high as i64, low)
    }

    /**
     * @dev Returns the raw two's complement bit pattern as a `U128`
     */
    pub fn as_raw(&self) -> U128 {
        U128([self.low, self.high as u64])
    }

    /* Narrowing conversions */

    /// Truncates to the lowest 32 bits
    pub const fn int_value(&self) -> i32 {
        self.low as i32
    }

    /// Truncates to the lowest 64 bits
    pub const fn long_value(&self) -> i64 {
        self.low as i64
    }

    /**
     * @dev Returns the value as `u64`. Panics unless `0 <= self < 2^64`.
     */
    pub fn to_u64(&self) -> u64 {
        assert!(self.high == 0, "Int128: the value does not fit into u64: {}", self);
        self.low
    }

    pub fn try_to_u64(&self) -> Result<u64> {
        require!(self.high == 0, ErrorCode::NotA64BitValue);
        Ok(self.low)
    }

    /// Nearest `f64`, rounded the way arbitrary-precision integers round
    pub fn to_f64(&self) -> f64 {
        self.to_big_int().to_f64().unwrap_or(f64::NAN)
    }

    pub fn to_f32(&self) -> f32 {
        self.to_big_int().to_f32().unwrap_or(f32::NAN)
    }

    /**
     * @dev Compares with a 64-bit integer without widening it first
     */
    pub const fn equals_i64(&self, value: i64) -> bool {
        self.low == value as u64 && self.high == zero_or_minus_one(value)
    }
}

impl From<i64> for Int128 {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Int128 {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u64> for Int128 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/**
 * @dev From the native i128 (same bit pattern)
 */
impl From<i128> for Int128 {
    fn from(value: i128) -> Self {
        Self::from_bits((value >> 64) as i64, value as u64)
    }
}

impl From<Int128> for i128 {
    fn from(value: Int128) -> Self {
        ((value.high as i128) << 64) | (value.low as i128)
    }
}

impl From<[u8; Int128::BYTES]> for Int128 {
    fn from(bytes: [u8; Int128::BYTES]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<Int128> for BigInt {
    fn from(value: Int128) -> Self {
        value.to_big_int()
    }
}

impl TryFrom<&[u8]> for Int128 {
    type Error = anchor_lang::error::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_byte_array(bytes)
    }
}

/**
 * @dev Into u64 (only works for values in 0..2^64)
 */
impl TryFrom<Int128> for u64 {
    type Error = anchor_lang::error::Error;

    fn try_from(value: Int128) -> Result<Self> {
        value.try_to_u64()
    }
}

impl FromStr for Int128 {
    type Err = anchor_lang::error::Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::try_from_decimal(value)
    }
}
