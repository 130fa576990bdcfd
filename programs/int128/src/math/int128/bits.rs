// SPDX-License-Identifier: MIT

use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use super::Int128;

impl Int128 {
    /* Logical ops */

    pub const fn not(self) -> Self {
        Self::from_bits(!self.high, !self.low)
    }

    pub const fn and(self, other: Self) -> Self {
        Self::from_bits(self.high & other.high, self.low & other.low)
    }

    /// `self & !other`
    pub const fn and_not(self, other: Self) -> Self {
        Self::from_bits(self.high & !other.high, self.low & !other.low)
    }

    pub const fn or(self, other: Self) -> Self {
        Self::from_bits(self.high | other.high, self.low | other.low)
    }

    pub const fn xor(self, other: Self) -> Self {
        Self::from_bits(self.high ^ other.high, self.low ^ other.low)
    }

    /* Shifts */

    /**
     * @dev Shifts left by `len` bits. A negative `len` shifts right (sign-preserving).
     * Shifting by 128 or more bits leaves zero.
     */
    pub const fn shift_left(self, len: i32) -> Self {
        if len < 0 {
            self.sar_bits(len.unsigned_abs())
        } else {
            self.shl_bits(len as u32)
        }
    }

    /**
     * @dev Arithmetic (sign-preserving) right shift. A negative `len` shifts left.
     */
    pub const fn shift_right(self, len: i32) -> Self {
        if len < 0 {
            self.shl_bits(len.unsigned_abs())
        } else {
            self.sar_bits(len as u32)
        }
    }

    /**
     * @dev Logical right shift, vacated bits are always zero. A negative `len` shifts left.
     */
    pub const fn shift_right_unsigned(self, len: i32) -> Self {
        if len < 0 {
            self.shl_bits(len.unsigned_abs())
        } else {
            self.shr_bits(len as u32)
        }
    }

    const fn shl_bits(self, len: u32) -> Self {
        match len {
            0 => self,
            1..=63 => Self::from_bits(
                (self.high << len) | (self.low >> (64 - len)) as i64,
                self.low << len,
            ),
            64..=127 => Self::from_bits((self.low << (len - 64)) as i64, 0),
            _ => Self::ZERO,
        }
    }

    const fn sar_bits(self, len: u32) -> Self {
        let fill = self.high >> 63;
        match len {
            0 => self,
            1..=63 => Self::from_bits(
                self.high >> len,
                ((self.high as u64) << (64 - len)) | (self.low >> len),
            ),
            64..=127 => Self::from_bits(fill, (self.high >> (len - 64)) as u64),
            _ => Self::from_bits(fill, fill as u64),
        }
    }

    const fn shr_bits(self, len: u32) -> Self {
        match len {
            0 => self,
            1..=63 => Self::from_bits(
                ((self.high as u64) >> len) as i64,
                ((self.high as u64) << (64 - len)) | (self.low >> len),
            ),
            64..=127 => Self::from_bits(0, (self.high as u64) >> (len - 64)),
            _ => Self::ZERO,
        }
    }

    /* Bits */

    /**
     * @dev Returns the bit at `pos` (0 or 1). Bit 0 is the least significant bit of `low`.
     * Panics unless `pos < 128`.
     */
    pub const fn bit_at(self, pos: u32) -> u32 {
        assert!(pos < Self::BITS, "Int128: incorrect bit address");
        if pos < 64 {
            ((self.low >> pos) & 1) as u32
        } else {
            ((self.high >> (pos - 64)) & 1) as u32
        }
    }

    pub const fn set_bit_at(self, pos: u32) -> Self {
        assert!(pos < Self::BITS, "Int128: incorrect bit address");
        if pos < 64 {
            Self::from_bits(self.high, self.low | (1 << pos))
        } else {
            Self::from_bits(self.high | (1 << (pos - 64)), self.low)
        }
    }

    pub const fn clear_bit_at(self, pos: u32) -> Self {
        assert!(pos < Self::BITS, "Int128: incorrect bit address");
        if pos < 64 {
            Self::from_bits(self.high, self.low & !(1 << pos))
        } else {
            Self::from_bits(self.high & !(1 << (pos - 64)), self.low)
        }
    }

    pub const fn flip_bit_at(self, pos: u32) -> Self {
        assert!(pos < Self::BITS, "Int128: incorrect bit address");
        if pos < 64 {
            Self::from_bits(self.high, self.low ^ (1 << pos))
        } else {
            Self::from_bits(self.high ^ (1 << (pos - 64)), self.low)
        }
    }

    pub const fn number_of_leading_zeros(self) -> u32 {
        if self.high == 0 {
            self.low.leading_zeros() + 64
        } else {
            self.high.leading_zeros()
        }
    }

    pub const fn number_of_trailing_zeros(self) -> u32 {
        if self.low == 0 {
            self.high.trailing_zeros() + 64
        } else {
            self.low.trailing_zeros()
        }
    }

    /// Population count
    pub const fn bit_count(self) -> u32 {
        self.high.count_ones() + self.low.count_ones()
    }
}

impl Not for Int128 {
    type Output = Self;

    fn not(self) -> Self::Output {
        Int128::from_bits(!self.high, !self.low)
    }
}

impl BitAnd for Int128 {
    type Output = Self;

    fn bitand(self, other: Self) -> Self::Output {
        self.and(other)
    }
}

impl BitOr for Int128 {
    type Output = Self;

    fn bitor(self, other: Self) -> Self::Output {
        self.or(other)
    }
}

impl BitXor for Int128 {
    type Output = Self;

    fn bitxor(self, other: Self) -> Self::Output {
        self.xor(other)
    }
}

/**
 * @dev `<<` operator, same as `shift_left`
 */
impl Shl<i32> for Int128 {
    type Output = Self;

    fn shl(self, len: i32) -> Self::Output {
        self.shift_left(len)
    }
}

/**
 * @dev `>>` operator, arithmetic like on the native signed integers
 */
impl Shr<i32> for Int128 {
    type Output = Self;

    fn shr(self, len: i32) -> Self::Output {
        self.shift_right(len)
    }
}

impl BitAndAssign for Int128 {
    fn bitand_assign(&mut self, other: Self) {
        *self = *self & other;
    }
}

impl BitOrAssign for Int128 {
    fn bitor_assign(&mut self, other: Self) {
        *self = *self | other;
    }
}

impl BitXorAssign for Int128 {
    fn bitxor_assign(&mut self, other: Self) {
        *self = *self ^ other;
    }
}

impl ShlAssign<i32> for Int128 {
    fn shl_assign(&mut self, len: i32) {
        *self = *self << len;
    }
}

impl ShrAssign<i32> for Int128 {
    fn shr_assign(&mut self, len: i32) {
        *self = *self >> len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i128) -> Int128 {
        Int128::from(value)
    }

    #[test]
    fn test_logical_ops() {
        let a = int(0b1100);
        let b = int(0b1010);
        assert_eq!(a.and(b), int(0b1000));
        assert_eq!(a.or(b), int(0b1110));
        assert_eq!(a.xor(b), int(0b0110));
        assert_eq!(a.and_not(b), int(0b0100));
        assert_eq!(Int128::ZERO.not(), int(-1));
        assert_eq!(Int128::MAX_VALUE.not(), Int128::MIN_VALUE);

        assert_eq!(a & b, int(0b1000));
        assert_eq!(a | b, int(0b1110));
        assert_eq!(a ^ b, int(0b0110));
        assert_eq!(!a, int(!0b1100));
    }

    #[test]
    fn test_logical_ops_across_words() {
        let a = Int128::from_bits(0x00ff, 0xff00);
        let b = Int128::from_bits(0x0ff0, 0x0ff0);
        assert_eq!(a & b, Int128::from_bits(0x00f0, 0x0f00));
        assert_eq!(a | b, Int128::from_bits(0x0fff, 0xfff0));
        assert_eq!(a ^ b, Int128::from_bits(0x0f0f, 0xf0f0));
        assert_eq!(a.and_not(b), Int128::from_bits(0x000f, 0xf000));
    }

    #[test]
    fn test_assign_ops() {
        let mut a = int(0b1100);
        a &= int(0b0110);
        assert_eq!(a, int(0b0100));
        a |= int(0b0001);
        assert_eq!(a, int(0b0101));
        a ^= int(0b1111);
        assert_eq!(a, int(0b1010));
        a <<= 70;
        assert_eq!(a, int(0b1010 << 70));
        a >>= 71;
        assert_eq!(a, int(0b101));
    }

    #[test]
    fn test_shift_left() {
        assert_eq!(Int128::ONE.shift_left(0), Int128::ONE);
        assert_eq!(Int128::ONE.shift_left(1), int(2));
        assert_eq!(Int128::ONE.shift_left(63), Int128::from_bits(0, 1 << 63));
        assert_eq!(Int128::ONE.shift_left(64), Int128::from_bits(1, 0));
        assert_eq!(Int128::ONE.shift_left(127), Int128::MIN_VALUE);
        assert_eq!(Int128::ONE.shift_left(128), Int128::ZERO);
        assert_eq!(Int128::ONE.shift_left(1000), Int128::ZERO);
        assert_eq!(int(-1).shift_left(100), int(-1 << 100));
        assert_eq!(Int128::from_bits(0, u64::MAX).shift_left(4), Int128::from_bits(0xf, u64::MAX << 4));
        assert_eq!(int(0x1234_5678_9abc_def0_1122_3344_5566_7788) << 20, int(0x1234_5678_9abc_def0_1122_3344_5566_7788 << 20));
    }

    #[test]
    fn test_shift_left_negative_len() {
        assert_eq!(int(-256).shift_left(-4), int(-16));
        assert_eq!(int(1 << 100).shift_left(-100), Int128::ONE);
        assert_eq!(int(5).shift_left(i32::MIN), Int128::ZERO);
    }

    #[test]
    fn test_shift_right() {
        assert_eq!(int(256).shift_right(4), int(16));
        assert_eq!(int(-256).shift_right(4), int(-16));
        assert_eq!(int(-1).shift_right(1), int(-1));
        assert_eq!(int(-1).shift_right(127), int(-1));
        assert_eq!(int(-1).shift_right(500), int(-1));
        assert_eq!(Int128::MIN_VALUE.shift_right(64), Int128::from_bits(-1, i64::MIN as u64));
        assert_eq!(Int128::MIN_VALUE.shift_right(127), int(-1));
        assert_eq!(Int128::MAX_VALUE.shift_right(127), Int128::ZERO);
        assert_eq!(Int128::MAX_VALUE.shift_right(200), Int128::ZERO);
        assert_eq!(Int128::from_bits(1, 0).shift_right(1), Int128::from_bits(0, 1 << 63));
        assert_eq!(int(-5).shift_right(-2), int(-20));
        assert_eq!(int(i128::MIN + 12345) >> 37, int((i128::MIN + 12345) >> 37));
    }

    #[test]
    fn test_shift_right_unsigned() {
        // Logical at every length: below 64 the vacated high bits are zero too, not copies of the sign
        assert_eq!(int(-1).shift_right_unsigned(4), int((u128::MAX >> 4) as i128));
        assert_eq!(int(-1).shift_right_unsigned(1), Int128::MAX_VALUE);
        assert_eq!(int(-1).shift_right_unsigned(64), Int128::from_bits(0, u64::MAX));
        assert_eq!(int(-1).shift_right_unsigned(127), Int128::ONE);
        assert_eq!(int(-1).shift_right_unsigned(128), Int128::ZERO);
        assert_eq!(Int128::MIN_VALUE.shift_right_unsigned(4), Int128::from_bits(0x0800_0000_0000_0000, 0));
        assert_eq!(int(256).shift_right_unsigned(4), int(16));
        assert_eq!(int(3).shift_right_unsigned(-2), int(12));
        let value = int(-0x1234_5678_9abc_def0_1122_3344);
        assert_eq!(value.shift_right_unsigned(13), int((i128::from(value) as u128 >> 13) as i128));
    }

    #[test]
    fn test_bit_at() {
        let value = Int128::from_bits(0b101, 0b11);
        assert_eq!(value.bit_at(0), 1);
        assert_eq!(value.bit_at(1), 1);
        assert_eq!(value.bit_at(2), 0);
        assert_eq!(value.bit_at(64), 1);
        assert_eq!(value.bit_at(65), 0);
        assert_eq!(value.bit_at(66), 1);
        assert_eq!(value.bit_at(127), 0);
        assert_eq!(Int128::MIN_VALUE.bit_at(127), 1);
        assert_eq!(int(-1).bit_at(63), 1);
    }

    #[test]
    fn test_set_clear_flip_bit() {
        assert_eq!(Int128::ZERO.set_bit_at(0), Int128::ONE);
        assert_eq!(Int128::ZERO.set_bit_at(64), Int128::from_bits(1, 0));
        assert_eq!(Int128::ZERO.set_bit_at(127), Int128::MIN_VALUE);
        assert_eq!(Int128::ONE.set_bit_at(0), Int128::ONE);

        assert_eq!(int(-1).clear_bit_at(127), Int128::MAX_VALUE);
        assert_eq!(int(-1).clear_bit_at(0), int(-2));
        assert_eq!(Int128::ONE.clear_bit_at(1), Int128::ONE);

        assert_eq!(Int128::ZERO.flip_bit_at(100), int(1 << 100));
        assert_eq!(int(1 << 100).flip_bit_at(100), Int128::ZERO);
        assert_eq!(Int128::MAX_VALUE.flip_bit_at(127), int(-1));

        for pos in 0..128 {
            let single = Int128::ZERO.set_bit_at(pos);
            assert_eq!(single, Int128::ONE.shift_left(pos as i32));
            assert_eq!(single.bit_at(pos), 1);
            assert_eq!(single.bit_count(), 1);
            assert_eq!(single.number_of_trailing_zeros(), pos);
            assert_eq!(single.number_of_leading_zeros(), 127 - pos);
            assert_eq!(single.clear_bit_at(pos), Int128::ZERO);
            assert_eq!(single.flip_bit_at(pos), Int128::ZERO);
        }
    }

    #[test]
    #[should_panic(expected = "Int128: incorrect bit address")]
    fn test_bit_at_out_of_range() {
        let _ = Int128::ONE.bit_at(128);
    }

    #[test]
    #[should_panic(expected = "Int128: incorrect bit address")]
    fn test_set_bit_at_out_of_range() {
        let _ = Int128::ONE.set_bit_at(200);
    }

    #[test]
    fn test_zero_counts() {
        assert_eq!(Int128::ZERO.number_of_leading_zeros(), 128);
        assert_eq!(Int128::ZERO.number_of_trailing_zeros(), 128);
        assert_eq!(Int128::ONE.number_of_leading_zeros(), 127);
        assert_eq!(Int128::ONE.number_of_trailing_zeros(), 0);
        assert_eq!(int(-1).number_of_leading_zeros(), 0);
        assert_eq!(Int128::MAX_VALUE.number_of_leading_zeros(), 1);
        assert_eq!(Int128::MIN_VALUE.number_of_trailing_zeros(), 127);
        assert_eq!(Int128::from_bits(0, u64::MAX).number_of_leading_zeros(), 64);
    }

    #[test]
    fn test_bit_count() {
        assert_eq!(Int128::ZERO.bit_count(), 0);
        assert_eq!(Int128::from_bits(-1, u64::MAX).bit_count(), 128);
        assert_eq!(Int128::MAX_VALUE.bit_count(), 127);
        assert_eq!(Int128::MIN_VALUE.bit_count(), 1);
        assert_eq!(Int128::from_bits(0b1011, 0b111).bit_count(), 6);
    }
}
