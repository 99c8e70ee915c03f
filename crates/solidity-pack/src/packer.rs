//! Tight (`abi.encodePacked`) encoding of single values.
//!
//! Values are packed without length prefixes. Dynamic `bytes` and `string`
//! are emitted as is, `bool` as one byte, `address` as 20 bytes and integers
//! at their declared width. Inside arrays, `address` and `bytesN` elements
//! take a full 32-byte slot.

use alloy_primitives::Bytes;
use web3_utils::{hex_to_bytes, is_address, BigInt, Value};

use crate::args::PackedArgument;
use crate::error::PackError;
use crate::types::{BaseType, TypeDescriptor};

const WORD: usize = 32;
const ADDRESS_LEN: usize = 20;

impl PackedArgument {
    /// Packs the argument. Sequence values are packed element by element
    /// and concatenated.
    pub fn pack(&self) -> Result<Bytes, PackError> {
        let Value::Array(items) = &self.value else {
            return pack_value(&self.ty, &self.value, false);
        };

        if let Some(expected) = self.ty.arity() {
            if expected != items.len() {
                return Err(PackError::ArrayLengthMismatch {
                    ty: self.ty.canonical().to_string(),
                    expected,
                    actual: items.len(),
                });
            }
        }

        let mut out = Vec::new();
        for item in items {
            out.extend_from_slice(&pack_value(&self.ty, item, true)?);
        }
        Ok(out.into())
    }
}

/// Packs one value as `ty`. `in_array` selects the array-element layout.
pub fn pack_value(ty: &TypeDescriptor, value: &Value, in_array: bool) -> Result<Bytes, PackError> {
    match ty.base() {
        BaseType::Bytes => {
            if ty.is_array() {
                return Err(PackError::UnsupportedEncoding(format!(
                    "{ty}: dynamic bytes cannot be packed in an array"
                )));
            }
            Ok(hex_bytes(ty, value)?.into())
        }
        BaseType::String => {
            if ty.is_array() {
                return Err(PackError::UnsupportedEncoding(ty.to_string()));
            }
            match value {
                Value::String(s) => Ok(Bytes::copy_from_slice(s.trim_matches('\0').as_bytes())),
                other => Err(mismatch(ty, other)),
            }
        }
        BaseType::Bool => {
            if ty.is_array() {
                return Err(PackError::UnsupportedEncoding(ty.to_string()));
            }
            match value {
                Value::Bool(b) => Ok(Bytes::copy_from_slice(&[u8::from(*b)])),
                other => Err(mismatch(ty, other)),
            }
        }
        BaseType::Address => pack_address(ty, value, in_array),
        BaseType::FixedBytes => pack_fixed_bytes(ty, value, in_array),
        BaseType::Uint => pack_uint(ty, value),
        BaseType::Int => pack_int(ty, value),
        BaseType::Fixed | BaseType::Ufixed => Err(PackError::UnsupportedEncoding(ty.to_string())),
    }
}

fn pack_address(ty: &TypeDescriptor, value: &Value, in_array: bool) -> Result<Bytes, PackError> {
    let Value::String(address) = value else {
        return Err(mismatch(ty, value));
    };

    if !is_address(address) {
        return Err(PackError::InvalidAddress(format!(
            "{address} is not a valid address, or the checksum is invalid"
        )));
    }

    let raw = hex_to_bytes(address).map_err(|_| PackError::InvalidAddress(address.clone()))?;
    let width = if in_array { WORD } else { ADDRESS_LEN };
    Ok(left_pad_bytes(&raw, width))
}

fn pack_fixed_bytes(
    ty: &TypeDescriptor,
    value: &Value,
    in_array: bool,
) -> Result<Bytes, PackError> {
    let declared = ty
        .size()
        .filter(|n| (1..=WORD).contains(n))
        .ok_or_else(|| PackError::InvalidByteLength(format!("invalid type {ty}")))?;
    let width = if in_array { WORD } else { declared };

    let data = hex_bytes(ty, value)?;
    if data.len() > width {
        return Err(PackError::InvalidByteLength(format!(
            "{} bytes do not fit in {ty}",
            data.len()
        )));
    }

    let mut out = data;
    out.resize(width, 0);
    Ok(out.into())
}

fn pack_uint(ty: &TypeDescriptor, value: &Value) -> Result<Bytes, PackError> {
    let bits = integer_width(ty)?;
    let num = parse_number(value)?;

    if num.bit_len() > bits {
        return Err(PackError::ValueOutOfRange(format!(
            "supplied uint exceeds width: {bits} vs {}",
            num.bit_len()
        )));
    }
    if num.is_negative() {
        return Err(PackError::ValueOutOfRange(format!(
            "supplied uint {num} is negative"
        )));
    }

    Ok(tail(&num.magnitude().to_be_bytes::<WORD>(), bits / 8))
}

fn pack_int(ty: &TypeDescriptor, value: &Value) -> Result<Bytes, PackError> {
    let bits = integer_width(ty)?;
    let num = parse_number(value)?;

    if num.bit_len() > bits {
        return Err(PackError::ValueOutOfRange(format!(
            "supplied int exceeds width: {bits} vs {}",
            num.bit_len()
        )));
    }

    Ok(tail(&num.to_twos(bits).to_be_bytes::<WORD>(), bits / 8))
}

/// Validates the `N` of `uintN` / `intN`: a multiple of 8 in `8..=256`.
fn integer_width(ty: &TypeDescriptor) -> Result<usize, PackError> {
    ty.size()
        .filter(|bits| bits % 8 == 0 && (8..=256).contains(bits))
        .ok_or_else(|| PackError::InvalidBitWidth(format!("invalid {ty} size")))
}

/// Reads a number from a string (strict hex first, then decimal), a native
/// integer or an already-parsed big integer.
fn parse_number(value: &Value) -> Result<BigInt, PackError> {
    match value {
        Value::String(s) => Ok(BigInt::parse(s)?),
        Value::Number(n) => Ok(BigInt::from(*n)),
        Value::BigInt(n) => Ok(*n),
        other => Err(PackError::NotANumber(format!("{other:?} is not a number"))),
    }
}

/// Whole-byte hex (`0x` optional) or raw bytes.
fn hex_bytes(ty: &TypeDescriptor, value: &Value) -> Result<Vec<u8>, PackError> {
    match value {
        Value::Bytes(bytes) => Ok(bytes.clone()),
        Value::String(s) => hex_to_bytes(s).map_err(|_| {
            PackError::InvalidByteLength(format!("{s} is not whole-byte hex for {ty}"))
        }),
        other => Err(mismatch(ty, other)),
    }
}

fn left_pad_bytes(data: &[u8], width: usize) -> Bytes {
    let mut out = vec![0u8; width.saturating_sub(data.len())];
    out.extend_from_slice(data);
    out.into()
}

/// The last `len` bytes of a big-endian word.
fn tail(word: &[u8; WORD], len: usize) -> Bytes {
    Bytes::copy_from_slice(&word[WORD - len..])
}

fn mismatch(ty: &TypeDescriptor, value: &Value) -> PackError {
    let found = match value {
        Value::String(_) => "string",
        Value::Number(_) | Value::BigInt(_) => "number",
        Value::Bool(_) => "bool",
        Value::Bytes(_) => "bytes",
        Value::Array(_) => "array",
    };
    PackError::ValueTypeMismatch {
        ty: ty.to_string(),
        found: found.into(),
    }
}
