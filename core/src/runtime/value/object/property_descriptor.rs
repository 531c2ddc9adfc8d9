use crate::errors::RuntimeError;
use crate::runtime::gc::{Trace, Tracer};
use crate::runtime::value::JsValue;

use super::ObjectRef;

/// One own property slot.
///
/// "No such own property" is represented by `Option::None` at the lookup
/// sites, never by a data descriptor holding `undefined`.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub enumerable: bool,
    pub configurable: bool,
    pub kind: PropertyKind,
}

#[derive(Debug, Clone)]
pub enum PropertyKind {
    Data {
        value: JsValue,
        writable: bool,
    },
    Accessor {
        get: Option<ObjectRef>,
        set: Option<ObjectRef>,
    },
}

impl PropertyDescriptor {
    /// Writable, enumerable, configurable data property.
    pub fn data(value: JsValue) -> Self {
        Self {
            enumerable: true,
            configurable: true,
            kind: PropertyKind::Data {
                value,
                writable: true,
            },
        }
    }

    /// Writable, configurable, non-enumerable data property, the shape every
    /// built-in method is installed with.
    pub fn builtin_method(value: JsValue) -> Self {
        Self {
            enumerable: false,
            configurable: true,
            kind: PropertyKind::Data {
                value,
                writable: true,
            },
        }
    }

    /// Read-only, non-enumerable property.
    pub fn frozen(value: JsValue, configurable: bool) -> Self {
        Self {
            enumerable: false,
            configurable,
            kind: PropertyKind::Data {
                value,
                writable: false,
            },
        }
    }

    pub fn accessor(get: Option<ObjectRef>, set: Option<ObjectRef>) -> Self {
        Self {
            enumerable: true,
            configurable: true,
            kind: PropertyKind::Accessor { get, set },
        }
    }

    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    pub fn is_data_descriptor(&self) -> bool {
        matches!(self.kind, PropertyKind::Data { .. })
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        matches!(self.kind, PropertyKind::Accessor { .. })
    }

    pub fn value(&self) -> Option<&JsValue> {
        match &self.kind {
            PropertyKind::Data { value, .. } => Some(value),
            PropertyKind::Accessor { .. } => None,
        }
    }

    pub fn writable(&self) -> Option<bool> {
        match self.kind {
            PropertyKind::Data { writable, .. } => Some(writable),
            PropertyKind::Accessor { .. } => None,
        }
    }
}

impl Trace for PropertyDescriptor {
    fn trace(&self, tracer: &mut Tracer) {
        match &self.kind {
            PropertyKind::Data { value, .. } => value.trace(tracer),
            PropertyKind::Accessor { get, set } => {
                get.trace(tracer);
                set.trace(tracer);
            }
        }
    }
}

/// A partial descriptor for define-property style updates. Absent fields keep
/// the current attribute, or take the default when creating a property.
///
/// `get`/`set` use a nested option: `Some(None)` clears the accessor.
#[derive(Debug, Default, Clone)]
pub struct PropertyDescriptorPatch {
    pub enumerable: Option<bool>,
    pub configurable: Option<bool>,
    pub value: Option<JsValue>,
    pub writable: Option<bool>,
    pub get: Option<Option<ObjectRef>>,
    pub set: Option<Option<ObjectRef>>,
}

impl PropertyDescriptorPatch {
    pub fn value(value: JsValue) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), RuntimeError> {
        if self.is_data_descriptor() && self.is_accessor_descriptor() {
            return Err(RuntimeError::type_error(
                "invalid property descriptor: cannot both specify accessors and a value or writable attribute",
            ));
        }
        Ok(())
    }

    pub fn is_data_descriptor(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }

    pub fn is_accessor_descriptor(&self) -> bool {
        self.get.is_some() || self.set.is_some()
    }

    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_data_descriptor() && !self.is_accessor_descriptor()
    }

    pub fn is_empty(&self) -> bool {
        self.is_generic_descriptor() && self.enumerable.is_none() && self.configurable.is_none()
    }
}

impl From<PropertyDescriptor> for PropertyDescriptorPatch {
    fn from(desc: PropertyDescriptor) -> Self {
        let mut patch = Self {
            enumerable: Some(desc.enumerable),
            configurable: Some(desc.configurable),
            ..Default::default()
        };
        match desc.kind {
            PropertyKind::Data { value, writable } => {
                patch.value = Some(value);
                patch.writable = Some(writable);
            }
            PropertyKind::Accessor { get, set } => {
                patch.get = Some(get);
                patch.set = Some(set);
            }
        }
        patch
    }
}
