use thiserror::Error;

/// Conversion and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilsError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("number does not fit in 256 bits: {0}")]
    Overflow(String),

    #[error("unknown unit: {0}")]
    InvalidUnit(String),

    #[error("invalid utf-8: {0}")]
    InvalidUtf8(String),

    #[error("invalid decimal amount: {0}")]
    InvalidDecimal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_hex() {
        let err = UtilsError::InvalidHex("0xzz".into());
        assert_eq!(err.to_string(), "invalid hex: 0xzz");
    }

    #[test]
    fn display_not_a_number() {
        let err = UtilsError::NotANumber("abc".into());
        assert_eq!(err.to_string(), "not a number: abc");
    }

    #[test]
    fn display_overflow() {
        let err = UtilsError::Overflow("2^300".into());
        assert_eq!(err.to_string(), "number does not fit in 256 bits: 2^300");
    }

    #[test]
    fn display_invalid_unit() {
        let err = UtilsError::InvalidUnit("parsec".into());
        assert_eq!(err.to_string(), "unknown unit: parsec");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(UtilsError::InvalidUtf8("0xff".into()));
        assert!(err.to_string().contains("0xff"));
    }
}
