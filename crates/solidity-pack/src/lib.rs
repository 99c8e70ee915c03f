//! Solidity tightly packed encoding (`abi.encodePacked`) and the
//! `soliditySha3` hashes built on it.
//!
//! Arguments are either typed (`PackArg::typed("uint8", 5)`) or bare values
//! whose type is inferred:
//!
//! ```
//! use solidity_pack::{encode_packed, solidity_sha3, PackArg};
//!
//! let args = [PackArg::typed("uint8", 5u8), PackArg::typed("bool", true)];
//! assert_eq!(encode_packed(&args).unwrap(), "0x0501");
//!
//! let hash = solidity_sha3(&[PackArg::inferred("234")]).unwrap();
//! assert_eq!(
//!     hash.as_deref(),
//!     Some("0x61c831beab28d67d1bb40b5ae1a11e2757fa842f031a2d0bc94a7867bc5d26c2")
//! );
//! ```

pub mod args;
pub mod error;
pub mod json;
pub mod packer;
pub mod types;

use alloy_primitives::Bytes;
use tracing::{debug, trace};
use web3_utils::{bytes_to_hex, sha3, sha3_raw};

pub use args::{infer_type, normalize_arg, PackArg, PackedArgument};
pub use error::PackError;
pub use types::{elementary_name, parse_type_n, parse_type_n_array, ArraySuffix, BaseType, TypeDescriptor};
pub use web3_utils::{BigInt, Value};

/// Packs `args` in order and returns the concatenated payload.
pub fn encode_packed_bytes(args: &[PackArg]) -> Result<Bytes, PackError> {
    let mut payload = Vec::new();

    for (index, arg) in args.iter().enumerate() {
        let normalized = normalize_arg(arg)?;
        let packed = normalized.pack()?;
        trace!(index, ty = %normalized.ty, len = packed.len(), "packed argument");
        payload.extend_from_slice(&packed);
    }

    debug!(args = args.len(), len = payload.len(), "encoded packed payload");
    Ok(payload.into())
}

/// Packs `args` and returns the payload as lowercase `0x` hex.
///
/// No arguments yield `"0x"`.
pub fn encode_packed(args: &[PackArg]) -> Result<String, PackError> {
    Ok(bytes_to_hex(encode_packed_bytes(args)?))
}

/// Keccak-256 of the packed payload, `None` if it is the empty-input hash.
pub fn solidity_sha3(args: &[PackArg]) -> Result<Option<String>, PackError> {
    Ok(sha3(encode_packed_bytes(args)?))
}

/// Keccak-256 of the packed payload; the empty payload hashes to
/// [`web3_utils::SHA3_NULL`] instead of `None`.
pub fn solidity_sha3_raw(args: &[PackArg]) -> Result<String, PackError> {
    Ok(sha3_raw(encode_packed_bytes(args)?))
}

fn args_from_json(args: &[serde_json::Value]) -> Result<Vec<PackArg>, PackError> {
    args.iter().map(PackArg::try_from).collect()
}

/// [`encode_packed`] over JSON arguments.
pub fn encode_packed_json(args: &[serde_json::Value]) -> Result<String, PackError> {
    encode_packed(&args_from_json(args)?)
}

/// [`solidity_sha3`] over JSON arguments.
pub fn solidity_sha3_json(args: &[serde_json::Value]) -> Result<Option<String>, PackError> {
    solidity_sha3(&args_from_json(args)?)
}

/// [`solidity_sha3_raw`] over JSON arguments.
pub fn solidity_sha3_raw_json(args: &[serde_json::Value]) -> Result<String, PackError> {
    solidity_sha3_raw(&args_from_json(args)?)
}
