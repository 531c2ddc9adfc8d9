use crate::context::Context;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::object::{CallBehavior, Callable, PropertyKey};
use crate::runtime::value::JsValue;

impl Context {
    /// Resolve-then-invoke: `AsCallable(callee)` followed by the call.
    pub fn call(
        &mut self,
        callee: &JsValue,
        this: JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        let callable = self.as_callable(callee)?;
        self.invoke(&callable, this, args)
    }

    /// Looks `name` up on `target` (boxing primitives for the lookup) and
    /// calls the result with `target` as the receiver.
    pub fn call_method(
        &mut self,
        target: &JsValue,
        name: impl Into<PropertyKey>,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        let key = name.into();
        let method = self.get_v(target, &key)?;
        self.call(&method, target.clone(), args)
    }

    pub(crate) fn invoke(
        &mut self,
        callable: &Callable,
        this: JsValue,
        args: &[JsValue],
    ) -> Result<JsValue, RuntimeError> {
        if self.call_depth >= self.config.max_call_depth {
            tracing::warn!(
                target: "objcore::call",
                depth = self.call_depth,
                "call depth limit reached"
            );
            return Err(RuntimeError::range_error("maximum call stack size exceeded"));
        }

        self.call_depth += 1;
        tracing::trace!(
            target: "objcore::call",
            depth = self.call_depth,
            function = ?callable.object(),
            argc = args.len(),
            "invoke"
        );
        let result = match callable.behavior() {
            CallBehavior::Builtin(builtin) => self.call_builtin(*builtin, &this, args),
            CallBehavior::Host(native) => native.call(self, FunctionArgs::new(this, args.to_vec())),
        };
        self.call_depth -= 1;
        result
    }
}
