pub mod callback;
pub mod function_args;
pub mod handle;

pub use callback::{NativeFunction, NativeFunctionBoxed};
pub use function_args::FunctionArgs;
pub use handle::{Handle, HandleScope};
