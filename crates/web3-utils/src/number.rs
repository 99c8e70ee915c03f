use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;

use crate::error::UtilsError;
use crate::hexutil::is_hex_strict;

/// A signed integer with a 256-bit magnitude.
///
/// Covers the full `uint256` range as well as `int256`, which a plain `I256`
/// cannot. Zero is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    negative: bool,
    magnitude: U256,
}

impl BigInt {
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: U256::ZERO,
    };

    pub fn new(magnitude: U256, negative: bool) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn magnitude(&self) -> U256 {
        self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Number of significant bits in the magnitude (0 for zero).
    pub fn bit_len(&self) -> usize {
        self.magnitude.bit_len()
    }

    /// Parses a base-10 integer with an optional leading `-`.
    pub fn from_dec_str(s: &str) -> Result<Self, UtilsError> {
        let (negative, digits) = split_sign(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UtilsError::NotANumber(s.to_string()));
        }

        let magnitude =
            U256::from_str_radix(digits, 10).map_err(|_| UtilsError::Overflow(s.to_string()))?;
        Ok(Self::new(magnitude, negative))
    }

    /// Parses a base-16 integer with an optional leading `-` and `0x` prefix.
    ///
    /// `0x` with no digits is zero.
    pub fn from_hex_str(s: &str) -> Result<Self, UtilsError> {
        let (negative, rest) = split_sign(s);
        let digits = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(UtilsError::NotANumber(s.to_string()));
        }
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }

        let magnitude =
            U256::from_str_radix(digits, 16).map_err(|_| UtilsError::Overflow(s.to_string()))?;
        Ok(Self::new(magnitude, negative))
    }

    /// Parses a strict hex string (`0x...` / `-0x...`) as hex and anything
    /// else as decimal.
    pub fn parse(s: &str) -> Result<Self, UtilsError> {
        if is_hex_strict(s) {
            Self::from_hex_str(s)
        } else {
            Self::from_dec_str(s)
        }
    }

    /// Two's-complement encoding of `self` at `width` bits.
    ///
    /// Non-negative values are returned unchanged. Callers must ensure
    /// `bit_len() <= width` and `width <= 256`.
    pub fn to_twos(&self, width: usize) -> U256 {
        if !self.negative {
            return self.magnitude;
        }

        let complement = U256::ZERO.wrapping_sub(self.magnitude);
        if width >= 256 {
            complement
        } else {
            complement & (U256::MAX >> (256 - width))
        }
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    }
}

impl FromStr for BigInt {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl From<U256> for BigInt {
    fn from(value: U256) -> Self {
        Self::new(value, false)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        Self::new(U256::from(value.unsigned_abs()), value < 0)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from(i128::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::new(U256::from(value), false)
    }
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        Self::new(U256::from(value), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal() {
        let n = BigInt::from_dec_str("234").unwrap();
        assert_eq!(n.magnitude(), U256::from(234u64));
        assert!(!n.is_negative());

        let n = BigInt::from_dec_str("-23").unwrap();
        assert_eq!(n.magnitude(), U256::from(23u64));
        assert!(n.is_negative());
    }

    #[test]
    fn parses_hex_with_sign() {
        let n = BigInt::from_hex_str("-0xa").unwrap();
        assert_eq!(n, BigInt::from(-10i128));

        let n = BigInt::from_hex_str("0xEA").unwrap();
        assert_eq!(n, BigInt::from(234u64));
    }

    #[test]
    fn empty_hex_is_zero() {
        assert_eq!(BigInt::from_hex_str("0x").unwrap(), BigInt::ZERO);
    }

    #[test]
    fn parse_prefers_hex_then_decimal() {
        assert_eq!(BigInt::parse("0x10").unwrap(), BigInt::from(16u64));
        assert_eq!(BigInt::parse("10").unwrap(), BigInt::from(10u64));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(BigInt::parse("abc"), Err(UtilsError::NotANumber(_))));
        assert!(matches!(BigInt::parse(""), Err(UtilsError::NotANumber(_))));
        assert!(matches!(BigInt::parse("-"), Err(UtilsError::NotANumber(_))));
        assert!(matches!(BigInt::parse("1.5"), Err(UtilsError::NotANumber(_))));
    }

    #[test]
    fn rejects_values_wider_than_256_bits() {
        let too_big = format!("0x1{}", "0".repeat(64));
        assert!(matches!(BigInt::parse(&too_big), Err(UtilsError::Overflow(_))));
    }

    #[test]
    fn negative_zero_is_zero() {
        let n = BigInt::from_dec_str("-0").unwrap();
        assert!(!n.is_negative());
        assert!(n.is_zero());
    }

    #[test]
    fn bit_len_counts_magnitude() {
        assert_eq!(BigInt::ZERO.bit_len(), 0);
        assert_eq!(BigInt::from(255u64).bit_len(), 8);
        assert_eq!(BigInt::from(256u64).bit_len(), 9);
        assert_eq!(BigInt::from(-128i128).bit_len(), 8);
    }

    #[test]
    fn twos_complement_at_width() {
        assert_eq!(BigInt::from(-1i128).to_twos(8), U256::from(0xffu64));
        assert_eq!(BigInt::from(-23i128).to_twos(8), U256::from(0xe9u64));
        assert_eq!(BigInt::from(-128i128).to_twos(8), U256::from(0x80u64));
        assert_eq!(BigInt::from(-1i128).to_twos(256), U256::MAX);
        assert_eq!(BigInt::from(5i128).to_twos(8), U256::from(5u64));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(BigInt::from(-42i128).to_string(), "-42");
        assert_eq!(BigInt::from(42u64).to_string(), "42");
    }
}
