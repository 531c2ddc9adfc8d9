use super::{number_to_js_string, JsValue};
use std::fmt;

/// Debug-oriented rendering. Objects print as their handle because
/// formatting their contents needs heap access.
impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "undefined"),
            JsValue::Null => write!(f, "null"),
            JsValue::Boolean(b) => write!(f, "{b}"),
            JsValue::Number(n) => write!(f, "{}", number_to_js_string(*n)),
            JsValue::String(s) => write!(f, "{s:?}"),
            JsValue::Symbol(sym) => write!(f, "{sym}"),
            JsValue::Object(obj) => write!(f, "[object {obj:?}]"),
        }
    }
}
