use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config '{path}'")]
    #[diagnostic(code(objcore::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config")]
    #[diagnostic(
        code(objcore::config::parse),
        help("expected a JSON object with any of: max_call_depth, gc_threshold, key_order")
    )]
    Parse(#[from] serde_json::Error),
}
