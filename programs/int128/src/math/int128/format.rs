// SPDX-License-Identifier: MIT

use core::fmt;

use super::Int128;

const BINARY_GROUP: usize = 32;
const HEX_GROUP: usize = 4;

/// Joins fixed-size groups of `digits` with `_`, no trailing separator
fn make_groups(digits: &str, group_size: usize) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / group_size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % group_size == 0 {
            grouped.push('_');
        }
        grouped.push(ch);
    }
    grouped
}

impl Int128 {
    /**
     * @dev Renders the value in the given radix (2..=36), with a leading `-` for negatives.
     * Goes through the arbitrary-precision integer rather than dividing natively.
     */
    pub fn to_string_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "Int128: radix out of range: {}", radix);
        self.to_big_int().to_str_radix(radix)
    }

    /// All 128 bits, `high` first, zero-padded
    pub fn to_binary_string(&self) -> String {
        format!("{:064b}{:064b}", self.high as u64, self.low)
    }

    pub fn to_binary_string_readable(&self) -> String {
        make_groups(&self.to_binary_string(), BINARY_GROUP)
    }

    /// 32 lowercase hex digits, `high` first, zero-padded
    pub fn to_hex_string(&self) -> String {
        format!("{:016x}{:016x}", self.high as u64, self.low)
    }

    pub fn to_hex_string_readable(&self) -> String {
        make_groups(&self.to_hex_string(), HEX_GROUP)
    }
}

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_big_int(), f)
    }
}

impl fmt::Debug for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int128({})", self)
    }
}

impl fmt::LowerHex for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex_string())
    }
}

impl fmt::UpperHex for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex_string().to_uppercase())
    }
}

impl fmt::Binary for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_binary_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_groups() {
        assert_eq!(make_groups("abcdefgh", 4), "abcd_efgh");
        assert_eq!(make_groups("abcdef", 4), "abcd_ef");
        assert_eq!(make_groups("abc", 4), "abc");
        assert_eq!(make_groups("", 4), "");
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Int128::ZERO.to_string(), "0");
        assert_eq!(Int128::ONE.to_string(), "1");
        assert_eq!(Int128::from_i64(-1).to_string(), "-1");
        assert_eq!(Int128::MAX_VALUE.to_string(), "170141183460469231731687303715884105727");
        assert_eq!(Int128::MIN_VALUE.to_string(), "-170141183460469231731687303715884105728");
        assert_eq!(Int128::from_bits(1, 0).to_string(), "18446744073709551616");
        assert_eq!(format!("{:>6}", Int128::from_i64(-42)), "   -42");
        assert_eq!(format!("{:?}", Int128::from_i64(-42)), "Int128(-42)");
    }

    #[test]
    fn test_to_string_radix() {
        assert_eq!(Int128::from_i64(255).to_string_radix(16), "ff");
        assert_eq!(Int128::from_i64(-255).to_string_radix(16), "-ff");
        assert_eq!(Int128::from_i64(5).to_string_radix(2), "101");
        assert_eq!(Int128::from_i64(35).to_string_radix(36), "z");
        assert_eq!(Int128::MIN_VALUE.to_string_radix(16), format!("-8{}", "0".repeat(31)));
    }

    #[test]
    #[should_panic(expected = "Int128: radix out of range")]
    fn test_to_string_radix_invalid() {
        let _ = Int128::ONE.to_string_radix(37);
    }

    #[test]
    fn test_to_binary_string() {
        assert_eq!(Int128::ZERO.to_binary_string(), "0".repeat(128));
        assert_eq!(Int128::ONE.to_binary_string(), format!("{}1", "0".repeat(127)));
        assert_eq!(Int128::MAX_VALUE.to_binary_string(), format!("0{}", "1".repeat(127)));
        assert_eq!(Int128::MIN_VALUE.to_binary_string(), format!("1{}", "0".repeat(127)));
        assert_eq!(Int128::from_i64(-1).to_binary_string(), "1".repeat(128));
    }

    #[test]
    fn test_to_binary_string_readable() {
        let readable = Int128::MIN_VALUE.to_binary_string_readable();
        let groups: Vec<&str> = readable.split('_').collect();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0], format!("1{}", "0".repeat(31)));
        assert!(groups[1..].iter().all(|group| *group == "0".repeat(32)));
        assert!(!readable.ends_with('_'));
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(Int128::ZERO.to_hex_string(), "0".repeat(32));
        assert_eq!(Int128::ONE.to_hex_string(), format!("{}1", "0".repeat(31)));
        assert_eq!(Int128::MAX_VALUE.to_hex_string(), format!("7{}", "f".repeat(31)));
        assert_eq!(Int128::MIN_VALUE.to_hex_string(), format!("8{}", "0".repeat(31)));
        assert_eq!(
            Int128::from_bits(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210).to_hex_string(),
            "0123456789abcdeffedcba9876543210"
        );
    }

    #[test]
    fn test_to_hex_string_readable() {
        assert_eq!(
            Int128::from_bits(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210).to_hex_string_readable(),
            "0123_4567_89ab_cdef_fedc_ba98_7654_3210"
        );
        assert_eq!(Int128::ZERO.to_hex_string_readable(), ["0000"; 8].join("_"));
    }

    #[test]
    fn test_hex_round_trip() {
        let value = Int128::from_bits(-0x1234, 0xabcd);
        assert_eq!(Int128::from_hex(&value.to_hex_string()), value);
        assert_eq!(Int128::from_hex(&value.to_hex_string_readable()), value);
    }

    #[test]
    fn test_format_traits() {
        let value = Int128::from_bits(0, 0xab);
        assert_eq!(format!("{:x}", value), format!("{}ab", "0".repeat(30)));
        assert_eq!(format!("{:X}", value), format!("{}AB", "0".repeat(30)));
        assert_eq!(format!("{:#x}", value), format!("0x{}ab", "0".repeat(30)));
        assert_eq!(format!("{:b}", Int128::ONE), format!("{}1", "0".repeat(127)));
        assert_eq!(format!("{:x}", Int128::from_i64(-1)), "f".repeat(32));
    }
}
