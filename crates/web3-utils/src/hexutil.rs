//! Hex string helpers.

use crate::error::UtilsError;
use crate::number::BigInt;

/// Checks for a `0x`-prefixed hex string, optionally negative (`-0x...`).
///
/// Any number of digits is accepted, including none and odd counts.
pub fn is_hex_strict(value: &str) -> bool {
    let rest = value.strip_prefix('-').unwrap_or(value);
    match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(digits) => digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Like [`is_hex_strict`], but the `0x` prefix is optional.
pub fn is_hex(value: &str) -> bool {
    let rest = value.strip_prefix('-').unwrap_or(value);
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .unwrap_or(rest);
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

pub(crate) fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Decodes a hex string (prefix optional) into bytes.
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>, UtilsError> {
    hex::decode(strip_hex_prefix(value)).map_err(|e| UtilsError::InvalidHex(format!("{value}: {e}")))
}

/// Encodes bytes as a lowercase 0x-prefixed hex string.
pub fn bytes_to_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Encodes the UTF-8 bytes of `value` as hex, dropping leading and trailing
/// NUL characters.
pub fn utf8_to_hex(value: &str) -> String {
    bytes_to_hex(value.trim_matches('\0'))
}

/// Decodes a strict hex string into UTF-8 text, dropping leading and trailing
/// zero bytes.
pub fn hex_to_utf8(value: &str) -> Result<String, UtilsError> {
    if !is_hex_strict(value) || value.starts_with('-') {
        return Err(UtilsError::InvalidHex(value.to_string()));
    }

    let bytes = hex_to_bytes(value)?;
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b != 0).map_or(start, |i| i + 1);

    String::from_utf8(bytes[start..end].to_vec())
        .map_err(|e| UtilsError::InvalidUtf8(format!("{value}: {e}")))
}

/// Formats a number as minimal hex: `0x` for non-negative values, `-0x` for
/// negative ones. Zero is `0x0`.
pub fn number_to_hex(value: &BigInt) -> String {
    if value.is_negative() {
        format!("-0x{:x}", value.magnitude())
    } else {
        format!("0x{:x}", value.magnitude())
    }
}

/// Converts a decimal (or strict hex) string to its hex representation.
pub fn from_decimal(value: &str) -> Result<String, UtilsError> {
    Ok(number_to_hex(&BigInt::parse(value)?))
}

/// Parses a strict hex (or decimal) string into a number.
pub fn hex_to_number(value: &str) -> Result<BigInt, UtilsError> {
    BigInt::parse(value)
}

/// Parses a strict hex (or decimal) string and renders it in base 10.
pub fn hex_to_number_string(value: &str) -> Result<String, UtilsError> {
    Ok(hex_to_number(value)?.to_string())
}

/// Left-pads `value` with `fill` to `chars` characters, not counting a `0x`
/// prefix, which is preserved.
pub fn left_pad(value: &str, chars: usize, fill: char) -> String {
    let (prefix, digits) = split_prefix(value);
    let padding = chars.saturating_sub(digits.len());
    let mut out = String::with_capacity(prefix.len() + padding + digits.len());
    out.push_str(prefix);
    out.extend(std::iter::repeat(fill).take(padding));
    out.push_str(digits);
    out
}

/// Right-pads `value` with `fill` to `chars` characters, not counting a `0x`
/// prefix, which is preserved.
pub fn right_pad(value: &str, chars: usize, fill: char) -> String {
    let (prefix, digits) = split_prefix(value);
    let padding = chars.saturating_sub(digits.len());
    let mut out = String::with_capacity(prefix.len() + padding + digits.len());
    out.push_str(prefix);
    out.push_str(digits);
    out.extend(std::iter::repeat(fill).take(padding));
    out
}

fn split_prefix(value: &str) -> (&str, &str) {
    let digits = strip_hex_prefix(value);
    (&value[..value.len() - digits.len()], digits)
}
