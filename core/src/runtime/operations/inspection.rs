use serde::Serialize;

use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{ObjectRef, PropertyKey, PropertyKind};
use crate::runtime::value::JsValue;

/// One row of an object's own property table, detached from the heap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySnapshot {
    pub key: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writable: Option<bool>,
    pub enumerable: bool,
    pub configurable: bool,
}

impl Context {
    /// The own properties of `obj` in key order, with values rendered for
    /// display. Never runs getters.
    pub fn property_table(&self, obj: ObjectRef) -> Result<Vec<PropertySnapshot>, RuntimeError> {
        let node = self.object(obj)?;
        let mut rows = Vec::with_capacity(node.properties.len());
        for key in self.own_property_keys(obj)? {
            let Some(desc) = node.get_own(&key) else {
                continue;
            };
            let (kind, value, writable) = match &desc.kind {
                PropertyKind::Data { value, writable } => {
                    ("data", Some(self.render_value(value)), Some(*writable))
                }
                PropertyKind::Accessor { .. } => ("accessor", None, None),
            };
            rows.push(PropertySnapshot {
                key: key.to_string(),
                kind,
                value,
                writable,
                enumerable: desc.enumerable,
                configurable: desc.configurable,
            });
        }
        Ok(rows)
    }

    /// Short human-readable form of a value; functions show their `name`.
    pub fn render_value(&self, value: &JsValue) -> String {
        let JsValue::Object(obj) = value else {
            return value.to_string();
        };
        let Some(node) = self.heap.get(*obj) else {
            return "<reclaimed>".to_string();
        };
        if node.is_callable() {
            let name = node
                .get_own(&PropertyKey::from("name"))
                .and_then(|desc| desc.value().and_then(JsValue::as_str).map(str::to_string))
                .unwrap_or_default();
            return format!("function {name}()");
        }
        format!("[object {}]", node.class_tag)
    }
}
