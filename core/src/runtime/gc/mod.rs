pub mod heap;
pub mod marker;
pub mod sweeper;
pub mod trace;

pub use heap::{CollectStats, ErasedGc, Gc, Heap};
pub use trace::{Trace, Tracer};
