use sha3::{Digest, Keccak256};

/// Keccak-256 of the empty input, 0x-prefixed.
///
/// [`sha3`] reports this digest as "no value"; [`sha3_raw`] returns it as is.
pub const SHA3_NULL: &str = "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";

/// Computes the Keccak-256 digest of `data`.
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Keccak256::digest(data.as_ref()).into()
}

/// Hashes `data` with Keccak-256 and returns the 0x-prefixed digest, or `None`
/// when the digest is [`SHA3_NULL`].
pub fn sha3(data: impl AsRef<[u8]>) -> Option<String> {
    let digest = format!("0x{}", hex::encode(keccak256(data)));
    if digest == SHA3_NULL {
        None
    } else {
        Some(digest)
    }
}

/// Like [`sha3`], but never returns the null sentinel.
pub fn sha3_raw(data: impl AsRef<[u8]>) -> String {
    sha3(data).unwrap_or_else(|| SHA3_NULL.to_string())
}
