use crate::context::Context;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{ObjectRef, PrototypeChain};

impl Context {
    pub fn get_prototype_of(&self, obj: ObjectRef) -> Result<Option<ObjectRef>, RuntimeError> {
        Ok(self.object(obj)?.prototype)
    }

    /// Ordinary `SetPrototypeOf`. Refuses (returns false) when `obj` is not
    /// extensible or when `obj` already appears on the new prototype's chain.
    pub fn set_prototype_of(
        &mut self,
        obj: ObjectRef,
        prototype: Option<ObjectRef>,
    ) -> Result<bool, RuntimeError> {
        let node = self.object(obj)?;
        if node.prototype == prototype {
            return Ok(true);
        }
        if !node.extensible {
            return Ok(false);
        }
        if let Some(proto) = prototype {
            self.object(proto)?;
            if PrototypeChain::from_object(&self.heap, proto).any(|p| p == obj) {
                return Ok(false);
            }
        }
        self.object_mut(obj)?.prototype = prototype;
        Ok(true)
    }

    /// Writes the prototype link without any check. Cycles created this way
    /// are tolerated by every chain walk in this crate.
    pub fn set_prototype_unchecked(
        &mut self,
        obj: ObjectRef,
        prototype: Option<ObjectRef>,
    ) -> Result<(), RuntimeError> {
        self.object_mut(obj)?.prototype = prototype;
        Ok(())
    }

    /// Whether `candidate` is a strict ancestor of `obj`: reference identity
    /// against each node reached by following prototype links from `obj`.
    ///
    /// Each node is visited once, so a cyclic chain ends the walk instead of
    /// looping.
    pub fn is_prototype_of(
        &self,
        candidate: ObjectRef,
        obj: ObjectRef,
    ) -> Result<bool, RuntimeError> {
        self.object(candidate)?;
        self.object(obj)?;
        Ok(PrototypeChain::ancestors_of(&self.heap, obj).any(|proto| proto == candidate))
    }

    pub fn is_extensible(&self, obj: ObjectRef) -> Result<bool, RuntimeError> {
        Ok(self.object(obj)?.extensible)
    }

    pub fn prevent_extensions(&mut self, obj: ObjectRef) -> Result<(), RuntimeError> {
        self.object_mut(obj)?.extensible = false;
        Ok(())
    }
}
