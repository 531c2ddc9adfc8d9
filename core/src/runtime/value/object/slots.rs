use std::collections::HashMap;

use crate::runtime::gc::{Trace, Tracer};
use crate::runtime::value::JsValue;

/// Slot holding the wrapped primitive of a Boolean/Number/String/Symbol object.
pub const PRIMITIVE_VALUE: &str = "PrimitiveValue";

/// Engine-internal per-object state that is invisible to property lookup.
#[derive(Debug, Default, Clone)]
pub struct InternalSlots {
    entries: HashMap<&'static str, JsValue>,
}

impl InternalSlots {
    pub fn set(&mut self, name: &'static str, value: JsValue) {
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&JsValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

impl Trace for InternalSlots {
    fn trace(&self, tracer: &mut Tracer) {
        for value in self.entries.values() {
            value.trace(tracer);
        }
    }
}
