use crate::runtime::gc::Heap;
use crate::runtime::value::object::{CallBehavior, JsObject, ObjectRef, PropertyDescriptor};
use crate::runtime::value::JsValue;

/// Allocates a callable object inheriting from `function_prototype`, with
/// read-only, non-enumerable, configurable `length` and `name`.
pub(crate) fn create_function_object(
    heap: &mut Heap,
    function_prototype: ObjectRef,
    name: &str,
    length: u32,
    behavior: CallBehavior,
) -> ObjectRef {
    let mut function = JsObject::with_class("Function")
        .with_prototype(Some(function_prototype))
        .with_call(behavior);
    define_function_metadata(&mut function, name, length);
    heap.alloc(function)
}

pub(crate) fn define_function_metadata(function: &mut JsObject, name: &str, length: u32) {
    function.insert(
        "length".into(),
        PropertyDescriptor::frozen(JsValue::Number(f64::from(length)), true),
    );
    function.insert(
        "name".into(),
        PropertyDescriptor::frozen(JsValue::string(name), true),
    );
}
