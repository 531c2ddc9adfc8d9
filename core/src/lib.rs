pub mod context;
pub mod embedding;
pub mod engine;
pub mod errors;
pub mod runtime;

pub use context::Context;
pub use embedding::{FunctionArgs, HandleScope, NativeFunction};
pub use engine::{Engine, EngineConfig, KeyOrder};
pub use errors::{ConfigError, ObjCoreError, RuntimeError};
pub use runtime::builtins::Intrinsics;
pub use runtime::operations::{PreferredType, PropertySnapshot};
pub use runtime::value::JsValue as Value;
pub use runtime::value::object::{
    Callable, ObjectRef, PropertyDescriptor, PropertyDescriptorPatch, PropertyKey, PropertyKind,
};
pub use runtime::value::symbol::JsSymbol;
