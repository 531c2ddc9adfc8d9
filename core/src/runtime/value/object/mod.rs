pub mod function;
mod property;
pub mod property_descriptor;
pub mod prototype;
pub mod slots;

pub use function::{BuiltinFunction, CallBehavior, Callable};
pub use property::PropertyKey;
pub use property_descriptor::{PropertyDescriptor, PropertyDescriptorPatch, PropertyKind};
pub use prototype::PrototypeChain;
pub use slots::InternalSlots;

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::runtime::gc::{Gc, Trace, Tracer};
use crate::runtime::value::JsValue;

use slots::PRIMITIVE_VALUE;

pub type ObjectRef = Gc<JsObject>;

/// A heap-resident object: class tag, prototype link, extensibility flag,
/// insertion-ordered own properties and, for functions, a call behavior.
#[derive(Debug, Clone)]
pub struct JsObject {
    pub class_tag: Cow<'static, str>,
    pub prototype: Option<ObjectRef>,
    pub extensible: bool,
    pub properties: IndexMap<PropertyKey, PropertyDescriptor>,
    pub slots: InternalSlots,
    pub call: Option<CallBehavior>,
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

impl JsObject {
    /// A plain extensible `"Object"` with no prototype.
    pub fn new() -> Self {
        Self::with_class("Object")
    }

    pub fn with_class(class_tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            class_tag: class_tag.into(),
            prototype: None,
            extensible: true,
            properties: IndexMap::new(),
            slots: InternalSlots::default(),
            call: None,
        }
    }

    pub fn with_prototype(mut self, prototype: Option<ObjectRef>) -> Self {
        self.prototype = prototype;
        self
    }

    pub fn with_call(mut self, call: CallBehavior) -> Self {
        self.call = Some(call);
        self
    }

    pub fn is_callable(&self) -> bool {
        self.call.is_some()
    }

    /// The own descriptor for `key`. A String wrapper answers its index keys
    /// and `length` from the wrapped text; those never occupy the table.
    pub fn get_own(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        self.string_data()
            .and_then(|text| string_own_property(text, key))
            .or_else(|| self.properties.get(key).cloned())
    }

    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.is_string_key(key) || self.properties.contains_key(key)
    }

    /// Whether `key` is one of the read-only keys derived from a String
    /// wrapper's text.
    pub fn is_string_key(&self, key: &PropertyKey) -> bool {
        self.string_data()
            .is_some_and(|text| string_has_own(text, key))
    }

    /// UTF-16 length of the wrapped text, for String wrappers only.
    pub fn string_length(&self) -> Option<usize> {
        self.string_data().map(|text| text.encode_utf16().count())
    }

    fn string_data(&self) -> Option<&str> {
        if self.class_tag != "String" {
            return None;
        }
        self.slots.get(PRIMITIVE_VALUE).and_then(JsValue::as_str)
    }

    /// Inserts or replaces an own property. Replacing keeps the key's
    /// original position in the enumeration order.
    pub fn insert(&mut self, key: PropertyKey, descriptor: PropertyDescriptor) {
        self.properties.insert(key, descriptor);
    }

    /// Removes an own property, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        self.properties.shift_remove(key)
    }
}

impl Trace for JsObject {
    fn trace(&self, tracer: &mut Tracer) {
        self.properties.trace(tracer);
        self.slots.trace(tracer);
        if let Some(proto) = &self.prototype {
            tracer.mark(*proto);
        }
    }
}

fn string_has_own(text: &str, key: &PropertyKey) -> bool {
    if key.as_str() == Some("length") {
        return true;
    }
    key.array_index()
        .is_some_and(|index| text.encode_utf16().nth(index as usize).is_some())
}

fn string_own_property(text: &str, key: &PropertyKey) -> Option<PropertyDescriptor> {
    if key.as_str() == Some("length") {
        let length = text.encode_utf16().count();
        return Some(PropertyDescriptor::frozen(
            JsValue::Number(length as f64),
            false,
        ));
    }
    let unit = text.encode_utf16().nth(key.array_index()? as usize)?;
    // A lone surrogate half reads back as U+FFFD.
    let element = JsValue::String(String::from_utf16_lossy(&[unit]));
    Some(PropertyDescriptor::frozen(element, false).with_enumerable(true))
}
