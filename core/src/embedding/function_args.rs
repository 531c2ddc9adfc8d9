use crate::runtime::value::JsValue;

/// Receiver and argument list of one invocation.
#[derive(Debug, Clone)]
pub struct FunctionArgs {
    this_value: JsValue,
    values: Vec<JsValue>,
}

impl FunctionArgs {
    pub fn new(this_value: JsValue, values: Vec<JsValue>) -> Self {
        Self { this_value, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JsValue> {
        self.values.get(index)
    }

    /// The argument at `index`, or `undefined` when too few were passed.
    pub fn arg(&self, index: usize) -> JsValue {
        self.values.get(index).cloned().unwrap_or(JsValue::Undefined)
    }

    pub fn this(&self) -> &JsValue {
        &self.this_value
    }

    pub fn values(&self) -> &[JsValue] {
        &self.values
    }
}
