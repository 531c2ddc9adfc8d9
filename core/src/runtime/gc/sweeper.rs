use super::heap::Heap;

/// Frees every slot left unmarked by the preceding mark phase and clears the
/// mark bit on survivors. Returns the number of freed slots.
pub fn sweep(heap: &mut Heap) -> usize {
    heap.sweep_unmarked()
}
