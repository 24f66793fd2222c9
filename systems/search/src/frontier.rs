//! Min-priority frontier keyed on estimated total cost.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::nodes::NodeHandle;

/// Open set of nodes awaiting expansion.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub(crate) fn push(&mut self, handle: NodeHandle, estimate: u64) {
        self.heap.push(FrontierEntry { estimate, handle });
    }

    /// Removes the entry with the lowest estimate.
    pub(crate) fn pop(&mut self) -> Option<NodeHandle> {
        self.heap.pop().map(|entry| entry.handle)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Heap entry ordered by estimate alone.
///
/// Equal estimates are not separated by any secondary key; their relative
/// order is whatever the heap produces for the sequence of pushes, which is
/// deterministic for a given world.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    estimate: u64,
    handle: NodeHandle,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest estimate first.
        other.estimate.cmp(&self.estimate)
    }
}
