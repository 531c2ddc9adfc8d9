pub(crate) mod function;
mod intrinsics;
pub(crate) mod object;
mod primitive_wrappers;

pub use intrinsics::Intrinsics;

use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::value::object::BuiltinFunction;
use crate::runtime::value::JsValue;

impl Context {
    pub(crate) fn call_builtin(
        &mut self,
        builtin: BuiltinFunction,
        this: &JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        match builtin {
            BuiltinFunction::FunctionPrototype => Ok(JsValue::Undefined),
            BuiltinFunction::ObjectConstructor => self.object_constructor_call(args),
            method => self
                .call_object_prototype_method(method, this, args)
                .unwrap_or_else(|| {
                    Err(RuntimeError::type_error(format!(
                        "{method:?} is not an Object.prototype method"
                    )))
                }),
        }
    }
}
