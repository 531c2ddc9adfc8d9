use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{Callable, ObjectRef, PropertyKey};
use crate::runtime::value::{number_to_js_string, JsValue};

/// Conversion hint for [`Context::to_primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    Default,
    Number,
    String,
}

impl Context {
    /// `ToObject`: objects pass through, primitives are boxed, and
    /// `undefined`/`null` are a TypeError.
    pub fn to_object(&mut self, value: &JsValue) -> Result<ObjectRef, RuntimeError> {
        match value {
            JsValue::Undefined | JsValue::Null => Err(RuntimeError::type_error(format!(
                "cannot convert {} to object",
                value.type_name()
            ))),
            JsValue::Object(obj) => Ok(*obj),
            _ => self.box_primitive(value),
        }
    }

    /// `ToPropertyKey`. Objects are first reduced with a string hint, which
    /// may run user `toString`/`valueOf`.
    pub fn to_property_key(&mut self, value: &JsValue) -> Result<PropertyKey, RuntimeError> {
        match value {
            JsValue::String(s) => Ok(PropertyKey::String(s.clone())),
            JsValue::Symbol(sym) => Ok(PropertyKey::Symbol(sym.clone())),
            JsValue::Object(_) => {
                let primitive = self.to_primitive(value, PreferredType::String)?;
                self.to_property_key(&primitive)
            }
            _ => Ok(PropertyKey::String(self.to_string(value)?)),
        }
    }

    /// `ToString`. Symbols cannot be implicitly stringified.
    pub fn to_string(&mut self, value: &JsValue) -> Result<String, RuntimeError> {
        match value {
            JsValue::Undefined => Ok("undefined".to_string()),
            JsValue::Null => Ok("null".to_string()),
            JsValue::Boolean(b) => Ok(b.to_string()),
            JsValue::Number(n) => Ok(number_to_js_string(*n)),
            JsValue::String(s) => Ok(s.clone()),
            JsValue::Symbol(_) => Err(RuntimeError::type_error(
                "cannot convert a Symbol value to a string",
            )),
            JsValue::Object(_) => {
                let primitive = self.to_primitive(value, PreferredType::String)?;
                self.to_string(&primitive)
            }
        }
    }

    /// `ToPrimitive` via the ordinary `toString`/`valueOf` protocol.
    pub fn to_primitive(
        &mut self,
        value: &JsValue,
        hint: PreferredType,
    ) -> Result<JsValue, RuntimeError> {
        let JsValue::Object(obj) = value else {
            return Ok(value.clone());
        };

        let order = match hint {
            PreferredType::String => ["toString", "valueOf"],
            PreferredType::Number | PreferredType::Default => ["valueOf", "toString"],
        };

        for name in order {
            let method = self.get(*obj, &PropertyKey::from(name), value)?;
            if !self.is_callable(&method) {
                continue;
            }
            let result = self.call(&method, value.clone(), &[])?;
            if !result.is_object() {
                return Ok(result);
            }
        }

        Err(RuntimeError::type_error(
            "cannot convert object to primitive value",
        ))
    }

    pub fn is_callable(&self, value: &JsValue) -> bool {
        match value {
            JsValue::Object(obj) => self.heap.get(*obj).is_some_and(|o| o.is_callable()),
            _ => false,
        }
    }

    /// `AsCallable`: the single point where "must be callable" is enforced.
    pub fn as_callable(&self, value: &JsValue) -> Result<Callable, RuntimeError> {
        if let JsValue::Object(obj) = value
            && let Some(behavior) = &self.object(*obj)?.call
        {
            return Ok(Callable::new(*obj, behavior.clone()));
        }
        Err(RuntimeError::type_error(format!(
            "{} is not a function",
            describe(value)
        )))
    }
}

fn describe(value: &JsValue) -> String {
    match value {
        JsValue::Object(_) => "object".to_string(),
        JsValue::String(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}
