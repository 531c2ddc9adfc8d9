use crate::runtime::gc::{ErasedGc, Gc};
use crate::runtime::value::JsValue;

#[derive(Debug, Clone, Copy)]
pub struct Handle<T> {
    gc: Gc<T>,
}

impl<T> Handle<T> {
    pub fn new(gc: Gc<T>) -> Self {
        Self { gc }
    }

    pub fn gc(&self) -> Gc<T> {
        self.gc
    }

    pub fn erase(&self) -> ErasedGc {
        self.gc.erase()
    }
}

/// Host-side roots. Everything registered here, and everything reachable from
/// it, survives [`Context::collect_garbage`](crate::Context::collect_garbage).
#[derive(Default)]
pub struct HandleScope {
    roots: Vec<ErasedGc>,
}

impl HandleScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create<T>(&mut self, gc: Gc<T>) -> Handle<T> {
        self.roots.push(gc.erase());
        Handle::new(gc)
    }

    /// Roots `value` if it is an object; primitives need no rooting.
    pub fn root_value(&mut self, value: &JsValue) {
        if let JsValue::Object(obj) = value {
            self.roots.push(obj.erase());
        }
    }

    pub fn roots(&self) -> &[ErasedGc] {
        &self.roots
    }
}
