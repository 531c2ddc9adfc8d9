use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::value::object::slots::PRIMITIVE_VALUE;
use crate::runtime::value::object::{JsObject, ObjectRef};
use crate::runtime::value::JsValue;

impl Context {
    /// Wraps a primitive in a fresh object of the matching built-in class.
    ///
    /// Only the primitive is stored. A String wrapper's index keys and
    /// `length` are derived from it on lookup (see [`JsObject::get_own`]).
    pub(crate) fn box_primitive(&mut self, value: &JsValue) -> Result<ObjectRef, RuntimeError> {
        let (class_tag, prototype) = match value {
            JsValue::Boolean(_) => ("Boolean", self.intrinsics.boolean_prototype),
            JsValue::Number(_) => ("Number", self.intrinsics.number_prototype),
            JsValue::String(_) => ("String", self.intrinsics.string_prototype),
            JsValue::Symbol(_) => ("Symbol", self.intrinsics.symbol_prototype),
            JsValue::Undefined | JsValue::Null | JsValue::Object(_) => {
                return Err(RuntimeError::type_error(format!(
                    "cannot box a value of type {}",
                    value.type_name()
                )));
            }
        };

        let mut wrapper = JsObject::with_class(class_tag).with_prototype(Some(prototype));
        wrapper.slots.set(PRIMITIVE_VALUE, value.clone());

        Ok(self.heap.alloc(wrapper))
    }
}
