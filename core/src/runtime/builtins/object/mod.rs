pub(crate) mod prototype;

use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::builtins::function::create_function_object;
use crate::runtime::gc::Heap;
use crate::runtime::value::object::{BuiltinFunction, CallBehavior, ObjectRef, PropertyDescriptor};
use crate::runtime::value::JsValue;

/// Allocates `%Object%` and links it with `%Object.prototype%` in both
/// directions.
pub(crate) fn install_constructor(
    heap: &mut Heap,
    object_prototype: ObjectRef,
    function_prototype: ObjectRef,
) -> ObjectRef {
    let constructor = create_function_object(
        heap,
        function_prototype,
        "Object",
        1,
        CallBehavior::Builtin(BuiltinFunction::ObjectConstructor),
    );

    if let Some(ctor) = heap.get_mut(constructor) {
        ctor.insert(
            "prototype".into(),
            PropertyDescriptor::frozen(JsValue::Object(object_prototype), false),
        );
    }
    if let Some(proto) = heap.get_mut(object_prototype) {
        proto.insert(
            "constructor".into(),
            PropertyDescriptor::builtin_method(JsValue::Object(constructor)),
        );
    }
    constructor
}

impl Context {
    /// `Object(value)`: a fresh object for `undefined`/`null`, otherwise the
    /// value converted with `ToObject`.
    pub(crate) fn object_constructor_call(
        &mut self,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        let value = args.first().cloned().unwrap_or(JsValue::Undefined);
        if value.is_nullish() {
            return Ok(JsValue::Object(self.new_object()));
        }
        Ok(JsValue::Object(self.to_object(&value)?))
    }
}
