use std::fmt;

use alloy_primitives::U256;

use crate::address::is_address;
use crate::error::UtilsError;
use crate::hexutil::{bytes_to_hex, number_to_hex, strip_hex_prefix, utf8_to_hex};
use crate::number::BigInt;

/// A loosely typed input value, as handed to the hex and packing helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text, hex (`0x...`), decimal digits or an address; interpreted by context.
    String(String),
    /// A native integer.
    Number(i128),
    /// An already-parsed big integer.
    BigInt(BigInt),
    Bool(bool),
    /// Raw bytes.
    Bytes(Vec<u8>),
    Array(Vec<Value>),
}

/// The type [`to_hex_type`] infers for a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    Address,
    Bool,
    Bytes,
    String,
    Int256,
    Uint256,
}

impl TypeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeHint::Address => "address",
            TypeHint::Bool => "bool",
            TypeHint::Bytes => "bytes",
            TypeHint::String => "string",
            TypeHint::Int256 => "int256",
            TypeHint::Uint256 => "uint256",
        }
    }

    /// Whether the hint names a signed or unsigned integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, TypeHint::Int256 | TypeHint::Uint256)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a string is read when converting to hex.
enum StringKind {
    Address,
    NegativeHex,
    Hex,
    Decimal,
    Text,
}

fn classify(s: &str) -> StringKind {
    if is_address(s) {
        StringKind::Address
    } else if s.starts_with("-0x") || s.starts_with("-0X") {
        StringKind::NegativeHex
    } else if s.starts_with("0x") || s.starts_with("0X") {
        StringKind::Hex
    } else if is_decimal_integer(s) {
        StringKind::Decimal
    } else {
        StringKind::Text
    }
}

fn is_decimal_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn number_hint(n: &BigInt) -> TypeHint {
    if n.is_negative() {
        TypeHint::Int256
    } else {
        TypeHint::Uint256
    }
}

/// Infers the Solidity type [`to_hex`] would encode `value` as.
///
/// Strings are checked in order: address, negative hex, hex, decimal
/// integer, and finally plain text.
pub fn to_hex_type(value: &Value) -> Result<TypeHint, UtilsError> {
    match value {
        Value::String(s) => Ok(match classify(s) {
            StringKind::Address => TypeHint::Address,
            StringKind::NegativeHex => TypeHint::Int256,
            StringKind::Hex => TypeHint::Bytes,
            StringKind::Decimal => number_hint(&BigInt::from_dec_str(s)?),
            StringKind::Text => TypeHint::String,
        }),
        Value::Number(n) => Ok(number_hint(&BigInt::from(*n))),
        Value::BigInt(n) => Ok(number_hint(n)),
        Value::Bool(_) => Ok(TypeHint::Bool),
        Value::Bytes(_) => Ok(TypeHint::Bytes),
        Value::Array(_) => Err(UtilsError::NotANumber(
            "arrays have no hex representation".into(),
        )),
    }
}

/// Converts `value` to a 0x-prefixed hex string.
///
/// Addresses are lowercased, numbers become minimal hex (`-0x` when
/// negative), hex strings pass through, booleans become `0x01` / `0x00` and
/// other text is UTF-8 encoded.
pub fn to_hex(value: &Value) -> Result<String, UtilsError> {
    match value {
        Value::String(s) => match classify(s) {
            StringKind::Address => Ok(format!("0x{}", strip_hex_prefix(s).to_ascii_lowercase())),
            StringKind::NegativeHex | StringKind::Decimal => Ok(number_to_hex(&BigInt::parse(s)?)),
            StringKind::Hex => Ok(s.clone()),
            StringKind::Text => Ok(utf8_to_hex(s)),
        },
        Value::Number(n) => Ok(number_to_hex(&BigInt::from(*n))),
        Value::BigInt(n) => Ok(number_to_hex(n)),
        Value::Bool(b) => Ok(if *b { "0x01" } else { "0x00" }.to_string()),
        Value::Bytes(bytes) => Ok(bytes_to_hex(bytes)),
        Value::Array(_) => Err(UtilsError::NotANumber(
            "arrays have no hex representation".into(),
        )),
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Value::BigInt(BigInt::from(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
