use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::builtins::function::create_function_object;
use crate::runtime::gc::Heap;
use crate::runtime::value::object::{
    BuiltinFunction, CallBehavior, ObjectRef, PropertyDescriptor, PropertyKey,
};
use crate::runtime::value::JsValue;

const METHODS: [(&str, u32, BuiltinFunction); 6] = [
    ("toString", 0, BuiltinFunction::ObjectProtoToString),
    ("toLocaleString", 0, BuiltinFunction::ObjectProtoToLocaleString),
    ("valueOf", 0, BuiltinFunction::ObjectProtoValueOf),
    ("hasOwnProperty", 1, BuiltinFunction::ObjectProtoHasOwnProperty),
    ("isPrototypeOf", 1, BuiltinFunction::ObjectProtoIsPrototypeOf),
    (
        "propertyIsEnumerable",
        1,
        BuiltinFunction::ObjectProtoPropertyIsEnumerable,
    ),
];

/// Installs the inspection methods on `%Object.prototype%` as writable,
/// configurable, non-enumerable data properties.
pub(crate) fn install(heap: &mut Heap, object_prototype: ObjectRef, function_prototype: ObjectRef) {
    for (name, length, builtin) in METHODS {
        let method = create_function_object(
            heap,
            function_prototype,
            name,
            length,
            CallBehavior::Builtin(builtin),
        );
        if let Some(proto) = heap.get_mut(object_prototype) {
            proto.insert(
                name.into(),
                PropertyDescriptor::builtin_method(JsValue::Object(method)),
            );
        }
    }
}

impl Context {
    pub(crate) fn call_object_prototype_method(
        &mut self,
        method: BuiltinFunction,
        receiver: &JsValue,
        args: &[JsValue],
    ) -> Option<Result<JsValue, RuntimeError>> {
        let result = match method {
            BuiltinFunction::ObjectProtoToString => self.object_proto_to_string(receiver),
            BuiltinFunction::ObjectProtoToLocaleString => {
                self.object_proto_to_locale_string(receiver)
            }
            BuiltinFunction::ObjectProtoValueOf => self.object_proto_value_of(receiver),
            BuiltinFunction::ObjectProtoHasOwnProperty => {
                self.object_proto_has_own_property(receiver, args)
            }
            BuiltinFunction::ObjectProtoIsPrototypeOf => {
                self.object_proto_is_prototype_of(receiver, args)
            }
            BuiltinFunction::ObjectProtoPropertyIsEnumerable => {
                self.object_proto_property_is_enumerable(receiver, args)
            }
            _ => return None,
        };
        Some(result)
    }

    fn object_proto_to_string(&mut self, receiver: &JsValue) -> Result<JsValue, RuntimeError> {
        match receiver {
            JsValue::Undefined => return Ok(JsValue::string("[object Undefined]")),
            JsValue::Null => return Ok(JsValue::string("[object Null]")),
            _ => {}
        }
        let obj = self.to_object(receiver)?;
        let tag = self.object(obj)?.class_tag.clone();
        Ok(JsValue::String(format!("[object {tag}]")))
    }

    /// Resolves the current `toString` (possibly overridden) and invokes it
    /// on the coerced receiver.
    fn object_proto_to_locale_string(
        &mut self,
        receiver: &JsValue,
    ) -> Result<JsValue, RuntimeError> {
        let obj = self.to_object(receiver)?;
        let this = JsValue::Object(obj);
        let to_string = self.get(obj, &PropertyKey::from("toString"), &this)?;
        let callable = self.as_callable(&to_string)?;
        callable.call(self, this, &[])
    }

    fn object_proto_value_of(&mut self, receiver: &JsValue) -> Result<JsValue, RuntimeError> {
        Ok(JsValue::Object(self.to_object(receiver)?))
    }

    fn object_proto_has_own_property(
        &mut self,
        receiver: &JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        let key = self.to_property_key(args.first().unwrap_or(&JsValue::Undefined))?;
        let obj = self.to_object(receiver)?;
        Ok(JsValue::Boolean(self.has_own_property(obj, &key)?))
    }

    fn object_proto_is_prototype_of(
        &mut self,
        receiver: &JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        let Some(JsValue::Object(value)) = args.first() else {
            return Ok(JsValue::Boolean(false));
        };
        let value = *value;
        let candidate = self.to_object(receiver)?;
        Ok(JsValue::Boolean(self.is_prototype_of(candidate, value)?))
    }

    fn object_proto_property_is_enumerable(
        &mut self,
        receiver: &JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        let key = self.to_property_key(args.first().unwrap_or(&JsValue::Undefined))?;
        let obj = self.to_object(receiver)?;
        Ok(JsValue::Boolean(self.property_is_enumerable(obj, &key)?))
    }
}
