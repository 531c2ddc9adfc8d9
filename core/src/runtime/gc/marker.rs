use super::heap::{ErasedGc, Heap};
use super::trace::Tracer;

/// Marks everything reachable from `roots`, following prototype links,
/// property values and accessor functions. Returns how many slots were marked.
///
/// The walk uses an explicit worklist so arbitrarily long or cyclic prototype
/// chains never grow the native stack.
pub fn mark_from_roots(heap: &mut Heap, roots: &[ErasedGc]) -> usize {
    let mut worklist: Vec<ErasedGc> = Vec::with_capacity(roots.len());
    let mut marked = 0;

    for &root in roots {
        if try_mark(heap, root) {
            marked += 1;
            worklist.push(root);
        }
    }

    let mut tracer = Tracer::new();
    while let Some(gc) = worklist.pop() {
        heap.trace_entry(gc, &mut tracer);
        for child in tracer.take_discovered() {
            if try_mark(heap, child) {
                marked += 1;
                worklist.push(child);
            }
        }
    }

    marked
}

fn try_mark(heap: &mut Heap, gc: ErasedGc) -> bool {
    if !heap.exists(gc) || heap.is_marked(gc) {
        return false;
    }
    heap.mark(gc);
    true
}
