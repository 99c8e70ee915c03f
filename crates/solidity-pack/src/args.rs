//! Call arguments and their normalization into typed values.

use serde::Deserialize;
use web3_utils::{to_hex, to_hex_type, BigInt, Value};

use crate::error::PackError;
use crate::types::{BaseType, TypeDescriptor};

/// One argument to [`encode_packed`](crate::encode_packed).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum PackArg {
    /// A value with an explicit Solidity type, e.g. `("uint8", 5)`.
    Typed { ty: String, value: Value },
    /// A bare value whose type is inferred.
    Inferred(Value),
}

impl PackArg {
    pub fn typed(ty: impl Into<String>, value: impl Into<Value>) -> Self {
        PackArg::Typed {
            ty: ty.into(),
            value: value.into(),
        }
    }

    pub fn inferred(value: impl Into<Value>) -> Self {
        PackArg::Inferred(value.into())
    }
}

impl From<Value> for PackArg {
    fn from(value: Value) -> Self {
        PackArg::Inferred(value)
    }
}

/// An argument with a resolved type, ready for the packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedArgument {
    pub ty: TypeDescriptor,
    pub value: Value,
}

/// Resolves the type of `arg` and coerces its value.
///
/// Bare arrays are rejected: array arguments need an explicit type. Integer
/// arguments given as decimal strings are parsed up front.
pub fn normalize_arg(arg: &PackArg) -> Result<PackedArgument, PackError> {
    let (ty, value) = match arg {
        PackArg::Inferred(Value::Array(_)) => {
            return Err(PackError::UnsupportedEncoding(
                "autodetection of array types is not supported".into(),
            ))
        }
        PackArg::Inferred(value) => infer_type(value)?,
        PackArg::Typed { ty, value } => (TypeDescriptor::parse(ty)?, value.clone()),
    };

    let value = match (ty.base(), value) {
        (BaseType::Int | BaseType::Uint, Value::String(s)) if !has_hex_prefix(&s) => {
            Value::BigInt(BigInt::from_dec_str(&s)?)
        }
        (_, value) => value,
    };

    Ok(PackedArgument { ty, value })
}

/// Infers the type of a bare value.
///
/// Integers keep their `int256` / `uint256` hint; everything else is packed
/// as `bytes` of its hex form (addresses lowercased, text UTF-8 encoded,
/// booleans as one byte).
pub fn infer_type(value: &Value) -> Result<(TypeDescriptor, Value), PackError> {
    let hint = to_hex_type(value)?;
    let hex = to_hex(value)?;

    let ty = if hint.is_integer() {
        TypeDescriptor::parse(hint.as_str())?
    } else {
        TypeDescriptor::parse("bytes")?
    };

    Ok((ty, Value::String(hex)))
}

/// `0x...` or `-0x...`, any case.
fn has_hex_prefix(s: &str) -> bool {
    let rest = s.strip_prefix('-').unwrap_or(s);
    rest.starts_with("0x") || rest.starts_with("0X")
}
