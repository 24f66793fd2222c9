//! Arena of immutable search nodes linked to their predecessors by handle.

use checkpoint_route_core::{CellCoord, VisitedSet};

/// Stable index of a node within a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeHandle(u32);

impl NodeHandle {
    pub(crate) const fn new(value: u32) -> Self {
        Self(value)
    }

    pub(crate) const fn get(&self) -> u32 {
        self.0
    }
}

/// Deduplication key of the augmented state space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    cell: CellCoord,
    visited: VisitedSet,
}

/// One state of the augmented search, frozen once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) cell: CellCoord,
    pub(crate) visited: VisitedSet,
    pub(crate) cost: u64,
    pub(crate) estimate: u64,
    pub(crate) parent: Option<NodeHandle>,
}

impl SearchNode {
    pub(crate) const fn key(&self) -> StateKey {
        StateKey {
            cell: self.cell,
            visited: self.visited,
        }
    }

    /// Accumulated cost plus estimated remaining cost.
    pub(crate) const fn priority(&self) -> u64 {
        self.cost.saturating_add(self.estimate)
    }
}

/// Owner of every node created during one search.
#[derive(Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
    capacity: u32,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::with_capacity_limit(u32::MAX)
    }
}

impl NodeArena {
    /// Arena refusing to hold more than `capacity` nodes.
    pub(crate) const fn with_capacity_limit(capacity: u32) -> Self {
        Self {
            nodes: Vec::new(),
            capacity,
        }
    }

    /// Stores the node, or returns `None` once every handle is taken.
    pub(crate) fn push(&mut self, node: SearchNode) -> Option<NodeHandle> {
        let index = u32::try_from(self.nodes.len()).ok()?;
        if index >= self.capacity {
            return None;
        }
        self.nodes.push(node);
        Some(NodeHandle::new(index))
    }

    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&SearchNode> {
        self.nodes.get(handle.get() as usize)
    }

    /// Cells from the origin to the node behind `handle`, inclusive.
    pub(crate) fn path_to(&self, handle: NodeHandle) -> Vec<CellCoord> {
        let mut path = Vec::new();
        let mut cursor = Some(handle);
        while let Some(node) = cursor.and_then(|handle| self.get(handle)) {
            path.push(node.cell);
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
