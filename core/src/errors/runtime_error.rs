use miette::Diagnostic;
use thiserror::Error;

use crate::runtime::value::JsValue;

/// Failures raised while operating on the object graph. None of them are
/// recovered inside the object layer; they unwind to the caller.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("type error: {message}")]
    #[diagnostic(code(objcore::type_error))]
    TypeError { message: String },

    #[error("range error: {message}")]
    #[diagnostic(
        code(objcore::range_error),
        help("a getter, setter or method is probably re-entering itself without bound")
    )]
    RangeError { message: String },

    /// A value thrown by host code, carried through unchanged.
    #[error("uncaught exception: {0}")]
    #[diagnostic(code(objcore::thrown))]
    Thrown(JsValue),

    #[error("invalid object handle")]
    #[diagnostic(
        code(objcore::invalid_handle),
        help("the object was reclaimed; keep it alive with a HandleScope across collections")
    )]
    InvalidHandle,
}

impl RuntimeError {
    pub fn type_error(message: impl Into<String>) -> Self {
        RuntimeError::TypeError {
            message: message.into(),
        }
    }

    pub fn range_error(message: impl Into<String>) -> Self {
        RuntimeError::RangeError {
            message: message.into(),
        }
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, RuntimeError::TypeError { .. })
    }
}
