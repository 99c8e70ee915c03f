use crate::error::UtilsError;
use crate::hash::keccak256;

/// Strips an optional `0x`/`0X` prefix and returns the 40 hex digits of an
/// address, or `None` if the shape is wrong.
fn address_digits(address: &str) -> Option<&str> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    if digits.len() == 40 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

/// Checks whether `address` is a valid Ethereum address.
///
/// The `0x` prefix is optional. All-lowercase and all-uppercase addresses carry
/// no checksum and are accepted as long as they have 40 hex digits; mixed-case
/// addresses must pass the EIP-55 checksum.
pub fn is_address(address: &str) -> bool {
    let Some(digits) = address_digits(address) else {
        return false;
    };

    let is_all_lower = !digits.chars().any(|c| c.is_ascii_uppercase());
    let is_all_upper = !digits.chars().any(|c| c.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return true;
    }

    check_address_checksum(address)
}

/// Verifies the EIP-55 mixed-case checksum of `address`.
///
/// Every letter must be uppercase exactly when the matching nibble of
/// `keccak256(lowercase_hex)` is 8 or above.
pub fn check_address_checksum(address: &str) -> bool {
    let Some(digits) = address_digits(address) else {
        return false;
    };

    let hash = keccak256(digits.to_ascii_lowercase().as_bytes());

    digits.chars().enumerate().all(|(i, c)| {
        if c.is_ascii_digit() {
            return true;
        }
        if nibble(&hash, i) >= 8 {
            c.is_ascii_uppercase()
        } else {
            c.is_ascii_lowercase()
        }
    })
}

/// Applies EIP-55 checksum casing to an address given in any case.
///
/// Returns the 0x-prefixed checksummed address.
pub fn to_checksum_address(address: &str) -> Result<String, UtilsError> {
    let digits = address_digits(address).ok_or_else(|| {
        UtilsError::InvalidAddress(format!("{address} is not a 40-digit hex address"))
    })?;

    let lower = digits.to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in lower.chars().enumerate() {
        if c.is_ascii_alphabetic() && nibble(&hash, i) >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}

/// Returns the `i`-th hex nibble of `hash`, most significant first.
fn nibble(hash: &[u8; 32], i: usize) -> u8 {
    let byte = hash[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}
