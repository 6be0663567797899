//! Order-keyed collection helpers.
//!
//! [`OrderQueue`] materializes a result set in topological order without
//! sorting: order indices are dense in `[0, N)`, so a bucket array sized to
//! the live node count places each item directly into its slot and a single
//! in-order drain yields the sorted sequence. [`union`] merges neighbor sets
//! when a query spans several nodes.

use std::collections::HashSet;
use std::hash::Hash;

/// A bounded priority sequence keyed by topological order index.
///
/// Items may be inserted in any order; [`into_sorted`](Self::into_sorted)
/// yields them by ascending priority. Priorities must be unique and below the
/// bound given at construction; both hold for order indices of live nodes.
#[derive(Debug)]
pub(crate) struct OrderQueue<T> {
    slots: Vec<Option<T>>,
}

impl<T> OrderQueue<T> {
    /// Creates a queue accepting priorities in `[0, bound)`.
    pub(crate) fn with_bound(bound: usize) -> Self {
        let mut slots = Vec::with_capacity(bound);
        slots.resize_with(bound, || None);
        OrderQueue { slots }
    }

    /// Files `id` under the given priority.
    pub(crate) fn insert(&mut self, priority: usize, id: T) {
        debug_assert!(self.slots[priority].is_none(), "duplicate priority");
        self.slots[priority] = Some(id);
    }

    /// Consumes the queue, yielding items by ascending priority.
    pub(crate) fn into_sorted(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}

/// Merges `other` into `acc` without duplication and returns the result.
pub(crate) fn union<T: Eq + Hash + Clone>(mut acc: HashSet<T>, other: &HashSet<T>) -> HashSet<T> {
    acc.extend(other.iter().cloned());
    acc
}
