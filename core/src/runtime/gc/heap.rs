use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::marker;
use super::sweeper;
use super::trace::Trace;

/// Typed handle into the [`Heap`] arena.
///
/// Handles are a slot index plus the generation the slot had when the value
/// was allocated: copying one never keeps the target alive. Only
/// reachability from the roots handed to [`Heap::collect`] does.
pub struct Gc<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Copy for Gc<T> {}

impl<T> Clone for Gc<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for Gc<T> {
    fn eq(&self, other: &Self) -> bool {
        self.erase() == other.erase()
    }
}

impl<T> Eq for Gc<T> {}

impl<T> Hash for Gc<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.erase().hash(state);
    }
}

impl<T> fmt::Debug for Gc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gc(#{}v{})", self.index, self.generation)
    }
}

impl<T> Gc<T> {
    pub fn erase(self) -> ErasedGc {
        ErasedGc {
            index: self.index,
            generation: self.generation,
        }
    }
}

/// A [`Gc`] with its type forgotten, as used for roots and tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErasedGc {
    index: u32,
    generation: u32,
}

trait TraceAny: Trace + Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Trace + Any> TraceAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct GcBox {
    marked: bool,
    value: Box<dyn TraceAny>,
}

struct Slot {
    generation: u32,
    entry: Option<GcBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectStats {
    pub before: usize,
    pub after: usize,
    pub collected: usize,
}

/// Arena owning every allocation of one engine.
///
/// Freed slots go on a free list and are reused with a bumped generation, so
/// a handle that outlives its allocation resolves to `None` instead of
/// aliasing the newer value. A slot whose generation is exhausted is retired.
pub struct Heap {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live_count: usize,
    alloc_count: usize,
    collection_threshold: usize,
}

impl Heap {
    pub fn new() -> Self {
        Self::with_threshold(1024)
    }

    pub fn with_threshold(collection_threshold: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live_count: 0,
            alloc_count: 0,
            collection_threshold: collection_threshold.max(1),
        }
    }

    pub fn alloc<T: Trace + Any>(&mut self, value: T) -> Gc<T> {
        let entry = GcBox {
            marked: false,
            value: Box::new(value),
        };
        let (index, generation) = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entry = Some(entry);
                (index, slot.generation)
            }
            None => {
                let index = u32::try_from(self.slots.len())
                    .unwrap_or_else(|_| panic!("heap exceeded {} slots", u32::MAX));
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                });
                (index, 0)
            }
        };
        self.live_count += 1;
        self.alloc_count += 1;
        Gc {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    pub fn get<T: Trace + Any>(&self, gc: Gc<T>) -> Option<&T> {
        self.entry(gc.erase())
            .and_then(|boxed| boxed.value.as_any().downcast_ref::<T>())
    }

    pub fn get_mut<T: Trace + Any>(&mut self, gc: Gc<T>) -> Option<&mut T> {
        self.entry_mut(gc.erase())
            .and_then(|boxed| boxed.value.as_any_mut().downcast_mut::<T>())
    }

    pub fn contains<T>(&self, gc: Gc<T>) -> bool {
        self.exists(gc.erase())
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn should_collect(&self) -> bool {
        self.alloc_count >= self.collection_threshold
    }

    pub fn collect(&mut self, roots: &[ErasedGc]) -> CollectStats {
        let before = self.live_count;
        marker::mark_from_roots(self, roots);
        let collected = sweeper::sweep(self);
        self.live_count -= collected;
        self.alloc_count = self.live_count;
        self.collection_threshold = (self.live_count.max(1)) * 2;
        let stats = CollectStats {
            before,
            after: self.live_count,
            collected,
        };
        tracing::debug!(
            target: "objcore::gc",
            before = stats.before,
            after = stats.after,
            collected = stats.collected,
            slots = self.slots.len(),
            "heap collected"
        );
        stats
    }

    /// Slots ever created, live or free.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn entry(&self, gc: ErasedGc) -> Option<&GcBox> {
        self.slots
            .get(gc.index as usize)
            .filter(|slot| slot.generation == gc.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn entry_mut(&mut self, gc: ErasedGc) -> Option<&mut GcBox> {
        self.slots
            .get_mut(gc.index as usize)
            .filter(|slot| slot.generation == gc.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    pub(crate) fn is_marked(&self, gc: ErasedGc) -> bool {
        self.entry(gc).is_some_and(|boxed| boxed.marked)
    }

    pub(crate) fn exists(&self, gc: ErasedGc) -> bool {
        self.entry(gc).is_some()
    }

    pub(crate) fn mark(&mut self, gc: ErasedGc) {
        if let Some(boxed) = self.entry_mut(gc) {
            boxed.marked = true;
        }
    }

    pub(crate) fn trace_entry(&self, gc: ErasedGc, tracer: &mut super::trace::Tracer) {
        if let Some(boxed) = self.entry(gc) {
            boxed.value.trace(tracer);
        }
    }

    pub(crate) fn sweep_unmarked(&mut self) -> usize {
        let mut freed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(boxed) = &mut slot.entry else {
                continue;
            };
            if boxed.marked {
                boxed.marked = false;
                continue;
            }
            slot.entry = None;
            freed += 1;
            if let Some(next) = slot.generation.checked_add(1) {
                slot.generation = next;
                self.free.push(index as u32);
            }
        }
        freed
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
