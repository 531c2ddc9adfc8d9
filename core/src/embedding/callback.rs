use std::fmt;
use std::rc::Rc;

use crate::context::Context;
use crate::embedding::function_args::FunctionArgs;
use crate::errors::RuntimeError;
use crate::runtime::value::JsValue;

/// A host-implemented function body.
///
/// The context is handed back in so the body can read or mutate the object
/// graph, including re-entering other calls.
pub trait NativeFunction {
    fn call(&self, ctx: &mut Context, args: FunctionArgs) -> Result<JsValue, RuntimeError>;
}

#[derive(Clone)]
pub struct NativeFunctionBoxed {
    callback: Rc<dyn NativeFunction>,
}

impl fmt::Debug for NativeFunctionBoxed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFunctionBoxed(..)")
    }
}

impl NativeFunctionBoxed {
    pub fn new<T: NativeFunction + 'static>(callback: T) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    pub fn from_closure<F>(callback: F) -> Self
    where
        F: Fn(&mut Context, FunctionArgs) -> Result<JsValue, RuntimeError> + 'static,
    {
        Self::new(ClosureFunction { callback })
    }

    pub fn call(&self, ctx: &mut Context, args: FunctionArgs) -> Result<JsValue, RuntimeError> {
        self.callback.call(ctx, args)
    }
}

struct ClosureFunction<F> {
    callback: F,
}

impl<F> NativeFunction for ClosureFunction<F>
where
    F: Fn(&mut Context, FunctionArgs) -> Result<JsValue, RuntimeError>,
{
    fn call(&self, ctx: &mut Context, args: FunctionArgs) -> Result<JsValue, RuntimeError> {
        (self.callback)(ctx, args)
    }
}
