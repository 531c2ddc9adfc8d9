pub mod builtins;
pub mod gc;
pub mod operations;
pub mod value;
