use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::UtilsError;
use crate::number::BigInt;

/// Ether denominations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Wei,
    #[serde(alias = "babbage", alias = "femtoether")]
    Kwei,
    #[serde(alias = "lovelace", alias = "picoether")]
    Mwei,
    #[serde(alias = "shannon", alias = "nanoether", alias = "nano")]
    Gwei,
    #[serde(alias = "microether", alias = "micro")]
    Szabo,
    #[serde(alias = "milliether", alias = "milli")]
    Finney,
    #[default]
    Ether,
    #[serde(alias = "grand")]
    Kether,
    Mether,
    Gether,
    Tether,
}

impl Unit {
    /// Power of ten relating one unit to wei.
    pub const fn decimals(&self) -> usize {
        match self {
            Unit::Wei => 0,
            Unit::Kwei => 3,
            Unit::Mwei => 6,
            Unit::Gwei => 9,
            Unit::Szabo => 12,
            Unit::Finney => 15,
            Unit::Ether => 18,
            Unit::Kether => 21,
            Unit::Mether => 24,
            Unit::Gether => 27,
            Unit::Tether => 30,
        }
    }

    /// Wei per unit.
    pub fn multiplier(&self) -> U256 {
        U256::from(10u64).pow(U256::from(self.decimals() as u64))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Wei => "wei",
            Unit::Kwei => "kwei",
            Unit::Mwei => "mwei",
            Unit::Gwei => "gwei",
            Unit::Szabo => "szabo",
            Unit::Finney => "finney",
            Unit::Ether => "ether",
            Unit::Kether => "kether",
            Unit::Mether => "mether",
            Unit::Gether => "gether",
            Unit::Tether => "tether",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.to_ascii_lowercase().as_str() {
            "wei" => Unit::Wei,
            "kwei" | "babbage" | "femtoether" => Unit::Kwei,
            "mwei" | "lovelace" | "picoether" => Unit::Mwei,
            "gwei" | "shannon" | "nanoether" | "nano" => Unit::Gwei,
            "szabo" | "microether" | "micro" => Unit::Szabo,
            "finney" | "milliether" | "milli" => Unit::Finney,
            "ether" => Unit::Ether,
            "kether" | "grand" => Unit::Kether,
            "mether" => Unit::Mether,
            "gether" => Unit::Gether,
            "tether" => Unit::Tether,
            _ => return Err(UtilsError::InvalidUnit(s.to_string())),
        };
        Ok(unit)
    }
}

/// Converts a decimal amount in `unit` to wei.
///
/// Accepts an optional leading `-` and at most `unit.decimals()` fractional
/// digits (e.g. `"1.5"` ether).
pub fn to_wei(amount: &str, unit: Unit) -> Result<BigInt, UtilsError> {
    let invalid = |reason: &str| UtilsError::InvalidDecimal(format!("{amount}: {reason}"));

    let (negative, unsigned) = match amount.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount),
    };

    let mut parts = unsigned.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(invalid("more than one decimal point"));
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("non-digit characters"));
    }

    let decimals = unit.decimals();
    if fraction.len() > decimals {
        return Err(invalid("too many decimal places"));
    }

    let overflow = || UtilsError::Overflow(amount.to_string());
    let parse = |digits: &str| -> Result<U256, UtilsError> {
        if digits.is_empty() {
            Ok(U256::ZERO)
        } else {
            U256::from_str_radix(digits, 10).map_err(|_| overflow())
        }
    };

    let fraction_wei = parse(fraction)?
        .checked_mul(U256::from(10u64).pow(U256::from((decimals - fraction.len()) as u64)))
        .ok_or_else(overflow)?;
    let wei = parse(whole)?
        .checked_mul(unit.multiplier())
        .and_then(|w| w.checked_add(fraction_wei))
        .ok_or_else(overflow)?;

    Ok(BigInt::new(wei, negative))
}

/// Converts a wei amount to a decimal string in `unit`, without trailing
/// fractional zeros.
pub fn from_wei(wei: &BigInt, unit: Unit) -> String {
    let base = unit.multiplier();
    let whole = wei.magnitude() / base;
    let fraction = wei.magnitude() % base;

    let mut out = String::new();
    if wei.is_negative() {
        out.push('-');
    }
    out.push_str(&whole.to_string());

    if !fraction.is_zero() {
        let digits = format!("{:0>width$}", fraction.to_string(), width = unit.decimals());
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ether_in_wei() {
        let wei = to_wei("1", Unit::Ether).unwrap();
        assert_eq!(wei.to_string(), "1000000000000000000");
    }

    #[test]
    fn fractional_amounts() {
        assert_eq!(to_wei("1.5", Unit::Ether).unwrap().to_string(), "1500000000000000000");
        assert_eq!(to_wei(".5", Unit::Gwei).unwrap().to_string(), "500000000");
        assert_eq!(to_wei("2.", Unit::Kwei).unwrap().to_string(), "2000");
    }

    #[test]
    fn negative_amounts() {
        let wei = to_wei("-0.1", Unit::Ether).unwrap();
        assert!(wei.is_negative());
        assert_eq!(wei.to_string(), "-100000000000000000");
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(matches!(to_wei("0.0001", Unit::Kwei), Err(UtilsError::InvalidDecimal(_))));
        assert!(matches!(to_wei("1.2.3", Unit::Ether), Err(UtilsError::InvalidDecimal(_))));
        assert!(matches!(to_wei(".", Unit::Ether), Err(UtilsError::InvalidDecimal(_))));
        assert!(matches!(to_wei("1e18", Unit::Wei), Err(UtilsError::InvalidDecimal(_))));
    }

    #[test]
    fn from_wei_formats_fraction() {
        let wei = BigInt::from(1_500_000_000_000_000_000u128);
        assert_eq!(from_wei(&wei, Unit::Ether), "1.5");
        assert_eq!(from_wei(&BigInt::from(1u64), Unit::Ether), "0.000000000000000001");
        assert_eq!(from_wei(&BigInt::from(3_000_000_000u64), Unit::Gwei), "3");
        assert_eq!(from_wei(&BigInt::from(-1_000i128), Unit::Kwei), "-1");
    }

    #[test]
    fn unit_names_and_aliases() {
        assert_eq!("shannon".parse::<Unit>().unwrap(), Unit::Gwei);
        assert_eq!("ETHER".parse::<Unit>().unwrap(), Unit::Ether);
        assert!(matches!("parsec".parse::<Unit>(), Err(UtilsError::InvalidUnit(_))));
        assert_eq!(Unit::Finney.to_string(), "finney");
    }

    #[test]
    fn unit_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Unit::Gwei).unwrap(), "\"gwei\"");
        let unit: Unit = serde_json::from_str("\"nano\"").unwrap();
        assert_eq!(unit, Unit::Gwei);
    }
}
