//! Solidity type strings: shorthand normalization and parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::PackError;

/// Shorthand names and their canonical expansions.
const SHORTHANDS: [(&str, &str); 4] = [
    ("int", "int256"),
    ("uint", "uint256"),
    ("fixed", "fixed128x128"),
    ("ufixed", "ufixed128x128"),
];

/// Expands shorthand type names (`uint` → `uint256`, `int[]` → `int256[]`,
/// ...). Array suffixes are preserved; other names are returned unchanged.
pub fn elementary_name(name: &str) -> String {
    for (short, full) in SHORTHANDS {
        if name == short {
            return full.to_string();
        }
        if let Some(suffix) = name.strip_prefix(short) {
            if suffix.starts_with('[') {
                return format!("{full}{suffix}");
            }
        }
    }
    name.to_string()
}

/// Extracts `N` from `typeN` (`uint8` → 8, `bytes32[]` → 32).
///
/// Only digits before the array suffix count; `None` if there are none.
pub fn parse_type_n(ty: &str) -> Option<usize> {
    let head = ty.find('[').map_or(ty, |open| &ty[..open]);
    let start = head.find(|c: char| c.is_ascii_digit())?;
    if start == 0 {
        return None;
    }

    let digits = &head[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Extracts `N` from a fixed-size array type `type[N]`.
///
/// `None` for dynamic arrays, non-array types and anything that is not a
/// name, optional width digits and one trailing `[N]`.
pub fn parse_type_n_array(ty: &str) -> Option<usize> {
    let inner = ty.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let (head, count) = (&inner[..open], &inner[open + 1..]);

    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let name_len = head.find(|c: char| c.is_ascii_digit()).unwrap_or(head.len());
    if name_len == 0 || !head[name_len..].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    count.parse().ok()
}

/// Elementary Solidity type family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Address,
    Bool,
    String,
    /// Dynamic `bytes`.
    Bytes,
    /// `bytesN`.
    FixedBytes,
    Uint,
    Int,
    Fixed,
    Ufixed,
}

/// Array suffix of a type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArraySuffix {
    /// `T[]`
    Dynamic,
    /// `T[N]`
    Fixed(usize),
}

/// A normalized and parsed Solidity type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    canonical: String,
    base: BaseType,
    size: Option<usize>,
    array: Option<ArraySuffix>,
}

impl TypeDescriptor {
    /// Normalizes `raw` and parses it.
    ///
    /// Unknown names, malformed widths and nested arrays are rejected with
    /// [`PackError::UnsupportedEncoding`]. Width ranges are not checked here;
    /// the packer reports those.
    pub fn parse(raw: &str) -> Result<Self, PackError> {
        let canonical = elementary_name(raw);

        let (head, array) = match canonical.find('[') {
            None => (canonical.as_str(), None),
            Some(open) => {
                let array = if &canonical[open..] == "[]" {
                    ArraySuffix::Dynamic
                } else {
                    let arity = parse_type_n_array(&canonical)
                        .ok_or_else(|| PackError::UnsupportedEncoding(canonical.clone()))?;
                    ArraySuffix::Fixed(arity)
                };
                (&canonical[..open], Some(array))
            }
        };

        let name_len = head.find(|c: char| c.is_ascii_digit()).unwrap_or(head.len());
        let (name, width) = head.split_at(name_len);
        let has_width = !width.is_empty() && width.bytes().all(|b| b.is_ascii_digit());

        let base = match name {
            "address" if width.is_empty() => BaseType::Address,
            "bool" if width.is_empty() => BaseType::Bool,
            "string" if width.is_empty() => BaseType::String,
            "bytes" if width.is_empty() => BaseType::Bytes,
            "bytes" if has_width => BaseType::FixedBytes,
            "uint" if has_width => BaseType::Uint,
            "int" if has_width => BaseType::Int,
            "fixed" if is_fixed_width(width) => BaseType::Fixed,
            "ufixed" if is_fixed_width(width) => BaseType::Ufixed,
            _ => return Err(PackError::UnsupportedEncoding(canonical.clone())),
        };

        let size = parse_type_n(&canonical);

        Ok(Self {
            canonical,
            base,
            size,
            array,
        })
    }

    /// The normalized type string, e.g. `uint256[]`.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn base(&self) -> BaseType {
        self.base
    }

    /// `N` from `typeN`: bits for integers, bytes for `bytesN`.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn array(&self) -> Option<ArraySuffix> {
        self.array
    }

    /// Declared element count of a fixed-size array type.
    pub fn arity(&self) -> Option<usize> {
        match self.array {
            Some(ArraySuffix::Fixed(n)) => Some(n),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }
}

/// `MxN` width of a fixed-point type.
fn is_fixed_width(width: &str) -> bool {
    match width.split_once('x') {
        Some((m, n)) => {
            !m.is_empty()
                && !n.is_empty()
                && m.bytes().all(|b| b.is_ascii_digit())
                && n.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

impl FromStr for TypeDescriptor {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
