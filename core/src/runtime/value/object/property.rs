use std::fmt;

use crate::runtime::gc::{Trace, Tracer};
use crate::runtime::value::symbol::JsSymbol;

/// A normalized property identifier: either string text or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(JsSymbol),
}

impl PropertyKey {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// The canonical array index this key denotes, if any.
    ///
    /// A string is an index when it is the decimal form of an integer in
    /// `0..2^32 - 1` without leading zeros.
    pub fn array_index(&self) -> Option<u32> {
        let PropertyKey::String(s) = self else {
            return None;
        };
        let bytes = s.as_bytes();
        if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
            return None;
        }

        let mut value: u64 = 0;
        for &b in bytes {
            if !b.is_ascii_digit() {
                return None;
            }
            value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
            if value > u64::from(u32::MAX) {
                return None;
            }
        }

        if value == u64::from(u32::MAX) {
            return None;
        }
        Some(value as u32)
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        PropertyKey::String(value.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl From<JsSymbol> for PropertyKey {
    fn from(value: JsSymbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{s}"),
            PropertyKey::Symbol(sym) => write!(f, "[{sym}]"),
        }
    }
}

impl Trace for PropertyKey {
    fn trace(&self, _tracer: &mut Tracer) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_indices() {
        assert_eq!(PropertyKey::from("0").array_index(), Some(0));
        assert_eq!(PropertyKey::from("42").array_index(), Some(42));
        assert_eq!(PropertyKey::from("4294967294").array_index(), Some(u32::MAX - 1));
    }

    #[test]
    fn non_canonical_strings_are_not_indices() {
        for s in ["", "01", "-1", "1.0", "4294967295", "99999999999", "a1"] {
            assert_eq!(PropertyKey::from(s).array_index(), None, "{s:?}");
        }
        assert_eq!(PropertyKey::Symbol(JsSymbol::new(Some("0"))).array_index(), None);
    }
}
