//! Conversion and validation helpers for Ethereum-compatible clients.
//!
//! This crate provides:
//! - Strict and loose hex checks, hex/bytes/UTF-8 conversion and padding
//! - Keccak-256 hashing with the `sha3` / `sha3_raw` null-hash convention
//! - EIP-55 address validation and checksumming
//! - A sign-magnitude 256-bit integer for decimal and hex number parsing
//! - A dynamic [`Value`] with type-hinted hex conversion
//! - Ether unit conversion (`to_wei` / `from_wei`)

pub mod address;
pub mod error;
pub mod hash;
pub mod hexutil;
pub mod number;
pub mod units;
pub mod value;

pub use address::{check_address_checksum, is_address, to_checksum_address};
pub use error::UtilsError;
pub use hash::{keccak256, sha3, sha3_raw, SHA3_NULL};
pub use hexutil::{
    bytes_to_hex, from_decimal, hex_to_bytes, hex_to_number, hex_to_number_string, hex_to_utf8,
    is_hex, is_hex_strict, left_pad, number_to_hex, right_pad, utf8_to_hex,
};
pub use number::BigInt;
pub use units::{from_wei, to_wei, Unit};
pub use value::{to_hex, to_hex_type, TypeHint, Value};
