//! Per-node bookkeeping for the graph engine.
//!
//! Each live node owns a [`NodeEntry`]: its current position in the
//! topological order plus the identity sets of its immediate neighbors on
//! both sides. Neighbor sets store identities rather than references, so the
//! mutual incoming/outgoing back-links never form an ownership cycle.

use std::collections::HashSet;
use std::hash::Hash;

/// Mutable per-node state: order index and both adjacency sets.
///
/// The node's identity is not duplicated here; it is the key under which the
/// entry is stored in the engine's node map. The two sets are kept in
/// lock-step by the engine: `b ∈ entry(a).outgoing` if and only if
/// `a ∈ entry(b).incoming`.
#[derive(Debug, Clone)]
pub(crate) struct NodeEntry<T> {
    /// Position of this node in the topological order, dense in `[0, N)`.
    order: usize,
    /// Identities of immediate predecessors (edges pointing into this node).
    incoming: HashSet<T>,
    /// Identities of immediate successors (edges pointing out of this node).
    outgoing: HashSet<T>,
}

impl<T: Eq + Hash> NodeEntry<T> {
    /// Creates an entry with the given order index and no edges.
    pub(crate) fn new(order: usize) -> Self {
        NodeEntry {
            order,
            incoming: HashSet::new(),
            outgoing: HashSet::new(),
        }
    }

    pub(crate) fn order(&self) -> usize {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        self.order = order;
    }

    pub(crate) fn incoming(&self) -> &HashSet<T> {
        &self.incoming
    }

    pub(crate) fn outgoing(&self) -> &HashSet<T> {
        &self.outgoing
    }

    /// Records `id` as an immediate predecessor. Returns `false` if it
    /// already was one.
    pub(crate) fn add_incoming(&mut self, id: T) -> bool {
        self.incoming.insert(id)
    }

    /// Records `id` as an immediate successor. Returns `false` if it already
    /// was one.
    pub(crate) fn add_outgoing(&mut self, id: T) -> bool {
        self.outgoing.insert(id)
    }

    pub(crate) fn remove_incoming(&mut self, id: &T) -> bool {
        self.incoming.remove(id)
    }

    pub(crate) fn remove_outgoing(&mut self, id: &T) -> bool {
        self.outgoing.remove(id)
    }

    /// Removes and returns the whole incoming set, leaving it empty.
    pub(crate) fn take_incoming(&mut self) -> HashSet<T> {
        std::mem::take(&mut self.incoming)
    }

    /// Removes and returns the whole outgoing set, leaving it empty.
    pub(crate) fn take_outgoing(&mut self) -> HashSet<T> {
        std::mem::take(&mut self.outgoing)
    }
}
