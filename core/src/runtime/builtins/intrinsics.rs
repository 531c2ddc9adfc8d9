use crate::runtime::gc::{ErasedGc, Heap};
use crate::runtime::value::object::slots::PRIMITIVE_VALUE;
use crate::runtime::value::object::{BuiltinFunction, CallBehavior, JsObject, ObjectRef};
use crate::runtime::value::JsValue;

use super::function::define_function_metadata;
use super::object;

/// The built-in objects every context starts with.
#[derive(Debug, Clone, Copy)]
pub struct Intrinsics {
    /// `%Object.prototype%`: root of every ordinary chain; has no prototype.
    pub object_prototype: ObjectRef,
    pub function_prototype: ObjectRef,
    pub object_constructor: ObjectRef,
    pub boolean_prototype: ObjectRef,
    pub number_prototype: ObjectRef,
    pub string_prototype: ObjectRef,
    pub symbol_prototype: ObjectRef,
}

impl Intrinsics {
    /// Builds the intrinsics in dependency order: the root prototype first,
    /// then the function prototype that built-in methods inherit from, then
    /// the methods themselves, then everything else that chains to the root.
    pub(crate) fn create(heap: &mut Heap) -> Self {
        let object_prototype = heap.alloc(JsObject::new());

        let mut function_proto = JsObject::with_class("Function")
            .with_prototype(Some(object_prototype))
            .with_call(CallBehavior::Builtin(BuiltinFunction::FunctionPrototype));
        define_function_metadata(&mut function_proto, "", 0);
        let function_prototype = heap.alloc(function_proto);

        object::prototype::install(heap, object_prototype, function_prototype);
        let object_constructor =
            object::install_constructor(heap, object_prototype, function_prototype);

        let boolean_prototype = alloc_wrapper_prototype(
            heap,
            object_prototype,
            "Boolean",
            Some(JsValue::Boolean(false)),
        );
        let number_prototype = alloc_wrapper_prototype(
            heap,
            object_prototype,
            "Number",
            Some(JsValue::Number(0.0)),
        );
        let string_prototype = alloc_wrapper_prototype(
            heap,
            object_prototype,
            "String",
            Some(JsValue::string("")),
        );
        let symbol_prototype = alloc_wrapper_prototype(heap, object_prototype, "Symbol", None);

        tracing::debug!(
            target: "objcore::realm",
            object_prototype = ?object_prototype,
            function_prototype = ?function_prototype,
            "intrinsics installed"
        );

        Self {
            object_prototype,
            function_prototype,
            object_constructor,
            boolean_prototype,
            number_prototype,
            string_prototype,
            symbol_prototype,
        }
    }

    pub fn roots(&self) -> Vec<ErasedGc> {
        vec![
            self.object_prototype.erase(),
            self.function_prototype.erase(),
            self.object_constructor.erase(),
            self.boolean_prototype.erase(),
            self.number_prototype.erase(),
            self.string_prototype.erase(),
            self.symbol_prototype.erase(),
        ]
    }
}

fn alloc_wrapper_prototype(
    heap: &mut Heap,
    object_prototype: ObjectRef,
    class_tag: &'static str,
    primitive: Option<JsValue>,
) -> ObjectRef {
    let mut proto = JsObject::with_class(class_tag).with_prototype(Some(object_prototype));
    if let Some(value) = primitive {
        proto.slots.set(PRIMITIVE_VALUE, value);
    }
    heap.alloc(proto)
}
