use ahash::AHashSet;

use crate::runtime::gc::Heap;

use super::{JsObject, ObjectRef};

/// Chain depth tracked without allocating; deeper walks spill into a set.
const INLINE_VISITED: usize = 16;

/// Walks prototype links, yielding each node at most once.
///
/// Prototype links are script-mutable and may form cycles. The walk records
/// every node it yields and stops at the first repeat, so it always
/// terminates. A link to a reclaimed node also ends the walk.
pub struct PrototypeChain<'h> {
    heap: &'h Heap,
    next: Option<ObjectRef>,
    visited: Visited,
}

impl<'h> PrototypeChain<'h> {
    /// `start`, then its prototype, then that prototype's prototype, ...
    pub fn from_object(heap: &'h Heap, start: ObjectRef) -> Self {
        Self {
            heap,
            next: Some(start),
            visited: Visited::default(),
        }
    }

    /// Strict ancestors of `start`: `start` is only yielded again if a cycle
    /// leads back to it.
    pub fn ancestors_of(heap: &'h Heap, start: ObjectRef) -> Self {
        let next = heap.get::<JsObject>(start).and_then(|obj| obj.prototype);
        Self {
            heap,
            next,
            visited: Visited::default(),
        }
    }
}

impl Iterator for PrototypeChain<'_> {
    type Item = ObjectRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(current) {
            return None;
        }
        let node = self.heap.get::<JsObject>(current)?;
        self.next = node.prototype;
        Some(current)
    }
}

#[derive(Default)]
struct Visited {
    inline: [Option<ObjectRef>; INLINE_VISITED],
    len: usize,
    spilled: Option<AHashSet<ObjectRef>>,
}

impl Visited {
    /// False if `node` was already recorded.
    fn insert(&mut self, node: ObjectRef) -> bool {
        if let Some(set) = &mut self.spilled {
            return set.insert(node);
        }
        if self.inline[..self.len].contains(&Some(node)) {
            return false;
        }
        if self.len < INLINE_VISITED {
            self.inline[self.len] = Some(node);
            self.len += 1;
            return true;
        }
        let mut set: AHashSet<ObjectRef> = self.inline.iter().flatten().copied().collect();
        set.insert(node);
        self.spilled = Some(set);
        true
    }
}
