use crate::context::Context;
use crate::engine::KeyOrder;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{ObjectRef, PropertyKey};
use crate::runtime::value::JsValue;

impl Context {
    /// `OwnPropertyKeys`: string keys before symbol keys. Within strings the
    /// order follows [`KeyOrder`] from the engine config. A String wrapper
    /// lists the indices of its text first and `length` ahead of the other
    /// string keys.
    pub fn own_property_keys(&self, obj: ObjectRef) -> Result<Vec<PropertyKey>, RuntimeError> {
        let node = self.object(obj)?;
        let text_length = node.string_length();

        let mut index_keys: Vec<(u32, PropertyKey)> = Vec::new();
        let mut string_keys: Vec<PropertyKey> = Vec::new();
        let mut symbol_keys: Vec<PropertyKey> = Vec::new();

        for key in node.properties.keys() {
            if node.is_string_key(key) {
                continue;
            }
            if key.is_symbol() {
                symbol_keys.push(key.clone());
                continue;
            }
            match (self.config.key_order, key.array_index()) {
                (KeyOrder::IntegerFirst, Some(index)) => index_keys.push((index, key.clone())),
                _ => string_keys.push(key.clone()),
            }
        }

        index_keys.sort_by_key(|(index, _)| *index);

        let text_keys = text_length.unwrap_or(0);
        let mut keys = Vec::with_capacity(
            text_keys + 1 + index_keys.len() + string_keys.len() + symbol_keys.len(),
        );
        keys.extend((0..text_keys).map(|index| PropertyKey::String(index.to_string())));
        keys.extend(index_keys.into_iter().map(|(_, key)| key));
        if text_length.is_some() {
            keys.push(PropertyKey::from("length"));
        }
        keys.extend(string_keys);
        keys.extend(symbol_keys);
        Ok(keys)
    }

    /// Enumerable own string keys, in [`own_property_keys`](Self::own_property_keys) order.
    pub fn enumerable_own_keys(&self, obj: ObjectRef) -> Result<Vec<PropertyKey>, RuntimeError> {
        let mut keys = Vec::new();
        for key in self.own_property_keys(obj)? {
            if key.is_symbol() {
                continue;
            }
            if self.property_is_enumerable(obj, &key)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    /// Enumerable own string-keyed `(key, value)` pairs, read through `Get`.
    ///
    /// The key list is snapshotted up front; a getter that deletes or hides a
    /// later key causes that key to be skipped rather than read.
    pub fn enumerable_own_entries(
        &mut self,
        obj: ObjectRef,
    ) -> Result<Vec<(PropertyKey, JsValue)>, RuntimeError> {
        let receiver = JsValue::Object(obj);
        let mut entries = Vec::new();
        for key in self.own_property_keys(obj)? {
            if key.is_symbol() {
                continue;
            }
            let Some(desc) = self.get_own_property(obj, &key)? else {
                continue;
            };
            if !desc.enumerable {
                continue;
            }
            let value = self.get(obj, &key, &receiver)?;
            entries.push((key, value));
        }
        Ok(entries)
    }
}
