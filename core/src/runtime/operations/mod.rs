mod coercion;
mod enumeration;
mod function_call;
mod inspection;
mod prototype_chain;
mod property_access;

pub use coercion::PreferredType;
pub use inspection::PropertySnapshot;
