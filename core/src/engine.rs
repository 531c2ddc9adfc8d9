use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::errors::ConfigError;

/// Order in which own property keys are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Strings then symbols, each in insertion order.
    #[default]
    Insertion,
    /// Array-index keys ascending, then other strings in insertion order,
    /// then symbols in insertion order.
    IntegerFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Nesting limit for function invocations, including getters, setters and
    /// methods resolved during coercion.
    pub max_call_depth: usize,
    /// Allocations before [`Context::should_collect`] first reports true.
    pub gc_threshold: usize,
    pub key_order: KeyOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_call_depth: 512,
            gc_threshold: 1024,
            key_order: KeyOrder::Insertion,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_max_call_depth(mut self, max: usize) -> Self {
        self.config.max_call_depth = max;
        self
    }

    pub fn with_gc_threshold(mut self, threshold: usize) -> Self {
        self.config.gc_threshold = threshold;
        self
    }

    pub fn with_key_order(mut self, order: KeyOrder) -> Self {
        self.config.key_order = order;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn new_context(&self) -> Context {
        Context::with_config(self.config.clone())
    }
}
