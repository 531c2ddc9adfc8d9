use crate::context::Context;
use crate::embedding::callback::NativeFunctionBoxed;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

use super::ObjectRef;

/// Engine-provided function bodies, dispatched by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinFunction {
    /// `%Function.prototype%` itself: accepts anything, returns undefined.
    FunctionPrototype,
    ObjectConstructor,
    ObjectProtoToString,
    ObjectProtoToLocaleString,
    ObjectProtoValueOf,
    ObjectProtoHasOwnProperty,
    ObjectProtoIsPrototypeOf,
    ObjectProtoPropertyIsEnumerable,
}

/// What happens when a callable object is invoked.
#[derive(Debug, Clone)]
pub enum CallBehavior {
    Builtin(BuiltinFunction),
    Host(NativeFunctionBoxed),
}

/// A resolved call target: the function object plus its behavior, produced by
/// [`Context::as_callable`] and consumed by [`Callable::call`].
#[derive(Debug, Clone)]
pub struct Callable {
    object: ObjectRef,
    behavior: CallBehavior,
}

impl Callable {
    pub(crate) fn new(object: ObjectRef, behavior: CallBehavior) -> Self {
        Self { object, behavior }
    }

    pub fn object(&self) -> ObjectRef {
        self.object
    }

    pub fn behavior(&self) -> &CallBehavior {
        &self.behavior
    }

    pub fn call(
        &self,
        ctx: &mut Context,
        this: JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        ctx.invoke(self, this, args)
    }
}
