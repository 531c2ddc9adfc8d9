use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{
    ObjectRef, PropertyDescriptor, PropertyDescriptorPatch, PropertyKey, PropertyKind,
    PrototypeChain,
};
use crate::runtime::value::JsValue;

impl Context {
    /// `GetOwnProperty`: a snapshot of the own descriptor, never consulting
    /// the prototype. `None` means absent.
    pub fn get_own_property(
        &self,
        obj: ObjectRef,
        key: &PropertyKey,
    ) -> Result<Option<PropertyDescriptor>, RuntimeError> {
        Ok(self.object(obj)?.get_own(key))
    }

    pub fn has_own_property(&self, obj: ObjectRef, key: &PropertyKey) -> Result<bool, RuntimeError> {
        Ok(self.object(obj)?.has_own(key))
    }

    /// False when the key is absent or present only further up the chain.
    pub fn property_is_enumerable(
        &self,
        obj: ObjectRef,
        key: &PropertyKey,
    ) -> Result<bool, RuntimeError> {
        Ok(self
            .object(obj)?
            .get_own(key)
            .is_some_and(|desc| desc.enumerable))
    }

    /// `HasProperty`: own or inherited.
    pub fn has_property(&self, obj: ObjectRef, key: &PropertyKey) -> Result<bool, RuntimeError> {
        self.object(obj)?;
        Ok(PrototypeChain::from_object(&self.heap, obj)
            .any(|node| self.heap.get(node).is_some_and(|o| o.has_own(key))))
    }

    /// `Get`: resolves `key` along the chain starting at `obj`. Getters run
    /// with `this = receiver`, whichever node the accessor was found on.
    pub fn get(
        &mut self,
        obj: ObjectRef,
        key: &PropertyKey,
        receiver: &JsValue,
    ) -> Result<JsValue, RuntimeError> {
        let Some(desc) = self.find_property(obj, key)? else {
            return Ok(JsValue::Undefined);
        };

        match desc.kind {
            PropertyKind::Data { value, .. } => Ok(value),
            PropertyKind::Accessor {
                get: Some(getter), ..
            } => self.call(&JsValue::Object(getter), receiver.clone(), &[]),
            PropertyKind::Accessor { get: None, .. } => Ok(JsValue::Undefined),
        }
    }

    /// `GetV`: property read on an arbitrary value. Primitives are boxed for
    /// the lookup but the original value stays the receiver.
    pub fn get_v(&mut self, value: &JsValue, key: &PropertyKey) -> Result<JsValue, RuntimeError> {
        let obj = self.to_object(value)?;
        self.get(obj, key, value)
    }

    /// `Set`: returns false when the assignment is refused (read-only data,
    /// setter-less accessor, non-extensible receiver).
    pub fn set(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        value: JsValue,
        receiver: &JsValue,
    ) -> Result<bool, RuntimeError> {
        let found = self.find_property(obj, &key)?;
        let kind = match found {
            Some(desc) => desc.kind,
            None => PropertyKind::Data {
                value: JsValue::Undefined,
                writable: true,
            },
        };

        match kind {
            PropertyKind::Data { writable, .. } => {
                if !writable {
                    return Ok(false);
                }
                let JsValue::Object(receiver_obj) = receiver else {
                    return Ok(false);
                };
                let receiver_obj = *receiver_obj;

                match self.get_own_property(receiver_obj, &key)? {
                    Some(existing) => match existing.kind {
                        PropertyKind::Accessor { .. } => Ok(false),
                        PropertyKind::Data {
                            writable: false, ..
                        } => Ok(false),
                        PropertyKind::Data { .. } => self.define_own_property(
                            receiver_obj,
                            key,
                            PropertyDescriptorPatch::value(value),
                        ),
                    },
                    None => self.create_data_property(receiver_obj, key, value),
                }
            }
            PropertyKind::Accessor {
                set: Some(setter), ..
            } => {
                self.call(&JsValue::Object(setter), receiver.clone(), &[value])?;
                Ok(true)
            }
            PropertyKind::Accessor { set: None, .. } => Ok(false),
        }
    }

    /// `DefineOwnProperty` for ordinary objects. Returns false when the
    /// change would break a non-configurable or non-extensible invariant.
    pub fn define_own_property(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        patch: PropertyDescriptorPatch,
    ) -> Result<bool, RuntimeError> {
        patch.validate()?;

        let node = self.object(obj)?;
        let current = node.get_own(&key);
        let extensible = node.extensible;
        let derived_from_text = node.is_string_key(&key);

        let Some(current) = current else {
            if !extensible {
                return Ok(false);
            }
            let created = descriptor_from_patch(patch);
            self.object_mut(obj)?.insert(key, created);
            return Ok(true);
        };

        if patch.is_empty() {
            return Ok(true);
        }

        if !is_compatible_change(&current, &patch) {
            return Ok(false);
        }
        if derived_from_text {
            return Ok(true);
        }

        let updated = apply_patch(current, patch);
        self.object_mut(obj)?.insert(key, updated);
        Ok(true)
    }

    /// Like [`define_own_property`](Self::define_own_property) but a refused
    /// definition is a TypeError.
    pub fn define_property_or_throw(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        patch: PropertyDescriptorPatch,
    ) -> Result<(), RuntimeError> {
        let message = format!("cannot define property {key}");
        if self.define_own_property(obj, key, patch)? {
            Ok(())
        } else {
            Err(RuntimeError::type_error(message))
        }
    }

    /// Defines a writable, enumerable, configurable data property.
    pub fn create_data_property(
        &mut self,
        obj: ObjectRef,
        key: PropertyKey,
        value: JsValue,
    ) -> Result<bool, RuntimeError> {
        self.define_own_property(obj, key, PropertyDescriptor::data(value).into())
    }

    /// `Delete`: false only for a non-configurable own property.
    pub fn delete(&mut self, obj: ObjectRef, key: &PropertyKey) -> Result<bool, RuntimeError> {
        let node = self.object_mut(obj)?;
        let configurable = match node.get_own(key) {
            None => return Ok(true),
            Some(desc) => desc.configurable,
        };
        if !configurable {
            return Ok(false);
        }
        node.remove(key);
        Ok(true)
    }

    /// First descriptor for `key` on the chain starting at `obj`, copied out
    /// so callers may re-enter the engine while holding it.
    fn find_property(
        &self,
        obj: ObjectRef,
        key: &PropertyKey,
    ) -> Result<Option<PropertyDescriptor>, RuntimeError> {
        self.object(obj)?;
        Ok(PrototypeChain::from_object(&self.heap, obj)
            .find_map(|node| self.heap.get(node).and_then(|o| o.get_own(key))))
    }
}

fn descriptor_from_patch(patch: PropertyDescriptorPatch) -> PropertyDescriptor {
    let enumerable = patch.enumerable.unwrap_or(false);
    let configurable = patch.configurable.unwrap_or(false);
    let kind = if patch.is_accessor_descriptor() {
        PropertyKind::Accessor {
            get: patch.get.flatten(),
            set: patch.set.flatten(),
        }
    } else {
        PropertyKind::Data {
            value: patch.value.unwrap_or(JsValue::Undefined),
            writable: patch.writable.unwrap_or(false),
        }
    };
    PropertyDescriptor {
        enumerable,
        configurable,
        kind,
    }
}

/// The non-configurable invariants: such a property may not become
/// configurable, flip enumerability, switch kind, or change a read-only value
/// or accessor pair. Making a writable property read-only stays allowed.
fn is_compatible_change(current: &PropertyDescriptor, patch: &PropertyDescriptorPatch) -> bool {
    if current.configurable {
        return true;
    }
    if patch.configurable == Some(true) {
        return false;
    }
    if patch
        .enumerable
        .is_some_and(|enumerable| enumerable != current.enumerable)
    {
        return false;
    }
    if patch.is_generic_descriptor() {
        return true;
    }

    match &current.kind {
        PropertyKind::Data { .. } if patch.is_accessor_descriptor() => false,
        PropertyKind::Accessor { .. } if patch.is_data_descriptor() => false,
        PropertyKind::Data { value, writable } => {
            if *writable {
                return true;
            }
            if patch.writable == Some(true) {
                return false;
            }
            patch
                .value
                .as_ref()
                .is_none_or(|new_value| new_value.same_value(value))
        }
        PropertyKind::Accessor { get, set } => {
            patch.get.is_none_or(|new_get| new_get == *get)
                && patch.set.is_none_or(|new_set| new_set == *set)
        }
    }
}

fn apply_patch(current: PropertyDescriptor, patch: PropertyDescriptorPatch) -> PropertyDescriptor {
    let enumerable = patch.enumerable.unwrap_or(current.enumerable);
    let configurable = patch.configurable.unwrap_or(current.configurable);

    if patch.is_generic_descriptor() {
        return PropertyDescriptor {
            enumerable,
            configurable,
            kind: current.kind,
        };
    }

    let kind = match (current.kind, patch.is_accessor_descriptor()) {
        (PropertyKind::Data { value, writable }, false) => PropertyKind::Data {
            value: patch.value.unwrap_or(value),
            writable: patch.writable.unwrap_or(writable),
        },
        (PropertyKind::Accessor { get, set }, true) => PropertyKind::Accessor {
            get: patch.get.unwrap_or(get),
            set: patch.set.unwrap_or(set),
        },
        // Kind switches start from the defaults of a fresh property.
        (PropertyKind::Data { .. }, true) => PropertyKind::Accessor {
            get: patch.get.flatten(),
            set: patch.set.flatten(),
        },
        (PropertyKind::Accessor { .. }, false) => PropertyKind::Data {
            value: patch.value.unwrap_or(JsValue::Undefined),
            writable: patch.writable.unwrap_or(false),
        },
    };

    PropertyDescriptor {
        enumerable,
        configurable,
        kind,
    }
}
