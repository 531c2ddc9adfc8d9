use crate::embedding::callback::NativeFunctionBoxed;
use crate::embedding::function_args::FunctionArgs;
use crate::embedding::handle::HandleScope;
use crate::engine::EngineConfig;
use crate::errors::RuntimeError;
use crate::runtime::builtins::function::create_function_object;
use crate::runtime::builtins::Intrinsics;
use crate::runtime::gc::{CollectStats, Heap};
use crate::runtime::value::JsValue;
use crate::runtime::value::object::{CallBehavior, JsObject, ObjectRef};

/// One engine instance: the object heap, the intrinsic objects built into
/// it, and the bookkeeping shared by every operation on the graph.
///
/// All object-model operations are methods on `Context`; they are spread over
/// `runtime::operations` by concern.
pub struct Context {
    pub(crate) heap: Heap,
    pub(crate) intrinsics: Intrinsics,
    pub(crate) config: EngineConfig,
    pub(crate) call_depth: usize,
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut heap = Heap::with_threshold(config.gc_threshold);
        let intrinsics = Intrinsics::create(&mut heap);
        tracing::debug!(
            target: "objcore::realm",
            max_call_depth = config.max_call_depth,
            key_order = ?config.key_order,
            live = heap.live_count(),
            "context initialised"
        );
        Self {
            heap,
            intrinsics,
            config,
            call_depth: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Raw heap access for hosts that manage nodes directly.
    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn object(&self, obj: ObjectRef) -> Result<&JsObject, RuntimeError> {
        self.heap.get(obj).ok_or(RuntimeError::InvalidHandle)
    }

    pub fn object_mut(&mut self, obj: ObjectRef) -> Result<&mut JsObject, RuntimeError> {
        self.heap.get_mut(obj).ok_or(RuntimeError::InvalidHandle)
    }

    pub fn alloc_object(&mut self, object: JsObject) -> ObjectRef {
        self.heap.alloc(object)
    }

    /// A fresh plain object inheriting from `%Object.prototype%`.
    pub fn new_object(&mut self) -> ObjectRef {
        let proto = self.intrinsics.object_prototype;
        self.object_create(Some(proto))
    }

    /// A fresh plain object with the given prototype (or none).
    pub fn object_create(&mut self, prototype: Option<ObjectRef>) -> ObjectRef {
        self.heap
            .alloc(JsObject::new().with_prototype(prototype))
    }

    /// Wraps a host closure in a function object inheriting from
    /// `%Function.prototype%`, with own `name` and `length`.
    pub fn create_native_function<F>(&mut self, name: &str, length: u32, callback: F) -> ObjectRef
    where
        F: Fn(&mut Context, FunctionArgs) -> Result<JsValue, RuntimeError> + 'static,
    {
        let behavior = CallBehavior::Host(NativeFunctionBoxed::from_closure(callback));
        let proto = self.intrinsics.function_prototype;
        create_function_object(&mut self.heap, proto, name, length, behavior)
    }

    /// Depth of the innermost invocation currently running.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    pub fn should_collect(&self) -> bool {
        self.heap.should_collect()
    }

    /// Reclaims every node unreachable from the intrinsics and `scope`.
    ///
    /// Handles held only in Rust locals or captured by host closures are not
    /// roots; register them in `scope` first.
    pub fn collect_garbage(&mut self, scope: &HandleScope) -> CollectStats {
        let mut roots = self.intrinsics.roots();
        roots.extend_from_slice(scope.roots());
        self.heap.collect(&roots)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
