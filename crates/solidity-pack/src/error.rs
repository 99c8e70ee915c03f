use thiserror::Error;
use web3_utils::UtilsError;

/// Packed-encoding errors.
///
/// Every variant is deterministic in its input; the first failing argument
/// aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("unsupported or invalid type: {0}")]
    UnsupportedEncoding(String),

    #[error("{ty} expects {expected} elements, got {actual}")]
    ArrayLengthMismatch {
        ty: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid byte length: {0}")]
    InvalidByteLength(String),

    #[error("invalid bit width: {0}")]
    InvalidBitWidth(String),

    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("cannot pack {found} as {ty}")]
    ValueTypeMismatch { ty: String, found: String },
}

impl From<UtilsError> for PackError {
    fn from(e: UtilsError) -> Self {
        match e {
            UtilsError::InvalidAddress(msg) => PackError::InvalidAddress(msg),
            UtilsError::Overflow(msg) => PackError::ValueOutOfRange(msg),
            UtilsError::InvalidHex(msg) => PackError::InvalidByteLength(msg),
            UtilsError::NotANumber(msg)
            | UtilsError::InvalidUnit(msg)
            | UtilsError::InvalidUtf8(msg)
            | UtilsError::InvalidDecimal(msg) => PackError::NotANumber(msg),
        }
    }
}
