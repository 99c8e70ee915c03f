//! JSON call arguments.
//!
//! An object carrying `t`/`type` or `v`/`value` is a typed argument (short
//! keys win). Anything else is a bare value:
//!
//! ```json
//! [{ "t": "string", "v": "Hello!%" }, { "type": "int8", "value": -23 }, "234"]
//! ```

use serde_json::{Map, Value as Json};
use web3_utils::Value;

use crate::args::PackArg;
use crate::error::PackError;

const TYPE_KEYS: [&str; 2] = ["t", "type"];
const VALUE_KEYS: [&str; 2] = ["v", "value"];

/// Converts a JSON value into a packer [`Value`].
///
/// Integral numbers become [`Value::Number`]; objects are kept as their JSON
/// text; `null` and non-integral numbers are not packable.
pub fn value_from_json(json: &Json) -> Result<Value, PackError> {
    match json {
        Json::Null => Err(PackError::NotANumber("null".into())),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i128::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(i128::from(u)))
            } else {
                Err(PackError::NotANumber(n.to_string()))
            }
        }
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => Ok(Value::Array(
            items.iter().map(value_from_json).collect::<Result<_, _>>()?,
        )),
        Json::Object(_) => Ok(Value::String(json.to_string())),
    }
}

fn first_key<'a>(object: &'a Map<String, Json>, keys: &[&str]) -> Option<&'a Json> {
    keys.iter().find_map(|key| object.get(*key))
}

impl TryFrom<&Json> for PackArg {
    type Error = PackError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        let object = match json {
            Json::Object(object)
                if TYPE_KEYS.iter().chain(VALUE_KEYS.iter()).any(|k| object.contains_key(*k)) =>
            {
                object
            }
            other => return Ok(PackArg::Inferred(value_from_json(other)?)),
        };

        let ty = match first_key(object, &TYPE_KEYS) {
            Some(Json::String(ty)) => ty.clone(),
            Some(other) => return Err(PackError::UnsupportedEncoding(other.to_string())),
            None => {
                return Err(PackError::UnsupportedEncoding(
                    "typed argument without a type".into(),
                ))
            }
        };

        let value = first_key(object, &VALUE_KEYS).ok_or_else(|| PackError::ValueTypeMismatch {
            ty: ty.clone(),
            found: "nothing".into(),
        })?;

        Ok(PackArg::Typed {
            value: value_from_json(value)?,
            ty,
        })
    }
}

impl TryFrom<Json> for PackArg {
    type Error = PackError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        PackArg::try_from(&json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn short_and_long_keys() {
        let arg = PackArg::try_from(json!({ "t": "uint8", "v": 5 })).unwrap();
        assert_eq!(arg, PackArg::typed("uint8", 5u8));

        let arg = PackArg::try_from(json!({ "type": "string", "value": "hi" })).unwrap();
        assert_eq!(arg, PackArg::typed("string", "hi"));
    }

    #[test]
    fn short_keys_take_precedence() {
        let arg = PackArg::try_from(json!({ "t": "uint8", "type": "string", "v": 1, "value": 2 }))
            .unwrap();
        assert_eq!(arg, PackArg::typed("uint8", 1u8));
    }

    #[test]
    fn bare_values_are_inferred() {
        assert_eq!(PackArg::try_from(json!("234")).unwrap(), PackArg::inferred("234"));
        assert_eq!(PackArg::try_from(json!(true)).unwrap(), PackArg::inferred(true));
        assert_eq!(PackArg::try_from(json!(-10)).unwrap(), PackArg::inferred(-10i32));
    }

    #[test]
    fn untyped_objects_are_kept_as_text() {
        let arg = PackArg::try_from(json!({ "a": 1 })).unwrap();
        assert_eq!(arg, PackArg::inferred(r#"{"a":1}"#));
    }

    #[test]
    fn null_and_fractions_are_rejected() {
        assert!(matches!(PackArg::try_from(json!(null)), Err(PackError::NotANumber(_))));
        assert!(matches!(
            PackArg::try_from(json!({ "t": "uint8", "v": 1.5 })),
            Err(PackError::NotANumber(_))
        ));
    }

    #[test]
    fn typed_arguments_need_type_and_value() {
        assert!(matches!(
            PackArg::try_from(json!({ "v": 1 })),
            Err(PackError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            PackArg::try_from(json!({ "t": "uint8" })),
            Err(PackError::ValueTypeMismatch { .. })
        ));
    }

    #[test]
    fn deserializes_argument_lists() {
        let args: Vec<PackArg> =
            serde_json::from_str(r#"[{"t":"bool","v":true},"0xff",[1,2]]"#).unwrap();
        assert_eq!(
            args,
            vec![
                PackArg::typed("bool", true),
                PackArg::inferred("0xff"),
                PackArg::inferred(vec![1u8, 2]),
            ]
        );
    }
}
