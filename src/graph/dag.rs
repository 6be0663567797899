//! The graph engine: a mutable DAG that keeps its topological order valid
//! across every mutation.
//!
//! Edge insertion uses the Pearce–Kelly incremental algorithm: when a new
//! edge runs against the grain of the current order, only the region of the
//! order array actually disturbed by the edge is rewritten, and a cycle is
//! detected during that same bounded scan. Cost is proportional to the size
//! of the affected region, not the graph.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use log::trace;

use crate::{
    graph::{
        node::NodeEntry,
        order::{union, OrderQueue},
    },
    Error, Result,
};

/// A directed acyclic graph over caller-supplied node identities that
/// maintains a valid topological order incrementally.
///
/// Nodes are identified by an opaque value of type `T`; equality and hashing
/// of identities follow `T`'s implementations. The graph rejects any
/// mutation that would introduce a cycle ([`Error::CycleDetected`]) and
/// leaves itself untouched when it does, so a valid order can be observed
/// between any two completed operations.
///
/// Absence is never an error: deleting a node or edge that does not exist,
/// or querying around ids the graph has never seen, is a no-op or an empty
/// result.
///
/// # Invariants
///
/// Between public operations the following always hold:
///
/// - no node is reachable from itself via outgoing edges
/// - for every edge `a -> b`, `a` precedes `b` in the order
/// - order indices of live nodes are exactly `{0, ..., len - 1}`
/// - incoming and outgoing sets are mutual duals (no dangling half-edges)
///
/// # Thread safety
///
/// `Dag<T>` is [`Send`] and [`Sync`] when `T` is, but performs no internal
/// locking; concurrent writers must serialize access externally.
///
/// # Examples
///
/// ```rust
/// use dagorder::Dag;
///
/// let mut dag: Dag<&str> = Dag::new();
/// dag.add_edge("cargo", "build")?;
/// dag.add_edge("rustc", "build")?;
/// dag.add_edge("build", "test")?;
///
/// let order = dag.order();
/// let pos = |id| order.iter().position(|n| *n == id).unwrap();
/// assert!(pos("cargo") < pos("build"));
/// assert!(pos("build") < pos("test"));
/// # Ok::<(), dagorder::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dag<T> {
    /// All live nodes, keyed by identity.
    nodes: HashMap<T, NodeEntry<T>>,
    /// The order array: `order[i]` is the identity of the node whose order
    /// index is `i`.
    order: Vec<T>,
}

impl<T: Eq + Hash + Clone> Dag<T> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Dag {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a graph pre-populated with the given nodes and no edges.
    ///
    /// The initial order is the iteration order of `nodes`; duplicates are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let dag = Dag::with_nodes(["a", "b", "c"]);
    /// assert_eq!(dag.len(), 3);
    /// assert!(dag.contains(&"b"));
    /// ```
    #[must_use]
    pub fn with_nodes(nodes: impl IntoIterator<Item = T>) -> Self {
        nodes.into_iter().collect()
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges currently registered.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|entry| entry.outgoing().len()).sum()
    }

    /// Returns `true` if a node with the given identity is present.
    #[must_use]
    pub fn contains(&self, id: &T) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns `true` if the edge `from -> to` is registered.
    #[must_use]
    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        self.nodes
            .get(from)
            .map_or(false, |entry| entry.outgoing().contains(to))
    }

    /// Inserts a node, appending it at the end of the current order.
    ///
    /// Returns `false` (and changes nothing) if the node already exists.
    pub fn add(&mut self, id: T) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id.clone(), NodeEntry::new(self.order.len()));
        self.order.push(id);
        true
    }

    /// Deletes a node, severing all of its edges on both sides.
    ///
    /// Every node after the deleted one moves down one slot in the order, so
    /// order indices stay dense and the relative order of survivors is
    /// preserved. Returns `false` if the node was not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("b", "c")?;
    ///
    /// assert!(dag.remove(&"b"));
    /// assert!(!dag.contains(&"b"));
    /// assert!(!dag.has_edge(&"a", &"b"));
    /// assert!(!dag.remove(&"b"));
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    pub fn remove(&mut self, id: &T) -> bool {
        let Some(entry) = self.nodes.remove(id) else {
            return false;
        };

        for pred in entry.incoming() {
            if let Some(pred_entry) = self.nodes.get_mut(pred) {
                pred_entry.remove_outgoing(id);
            }
        }
        for succ in entry.outgoing() {
            if let Some(succ_entry) = self.nodes.get_mut(succ) {
                succ_entry.remove_incoming(id);
            }
        }

        // Compact the order array: everything after the freed slot shifts
        // down by one.
        let slot = entry.order();
        self.order.remove(slot);
        for moved in &self.order[slot..] {
            if let Some(moved_entry) = self.nodes.get_mut(moved) {
                let order = moved_entry.order();
                moved_entry.set_order(order - 1);
            }
        }
        true
    }

    /// Drops all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
    }

    /// Registers the edge `from -> to`, creating either endpoint if missing.
    ///
    /// Re-adding an existing edge is a no-op that never fails. When the new
    /// edge runs against the grain of the current order, the affected region
    /// is rewritten in place (Pearce–Kelly); the scan phase is read-only, so
    /// a rejected edge leaves the graph exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if `from == to` or if the edge would
    /// make some node reachable from itself. No change is made in either
    /// case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::{Dag, Error};
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("b", "c")?;
    ///
    /// assert_eq!(dag.add_edge("c", "a"), Err(Error::CycleDetected));
    /// assert!(!dag.has_edge(&"c", &"a"));
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    pub fn add_edge(&mut self, from: T, to: T) -> Result<()> {
        if from == to {
            return Err(Error::CycleDetected);
        }
        if self.has_edge(&from, &to) {
            return Ok(());
        }

        self.add(from.clone());
        self.add(to.clone());

        let from_order = self.order_index(&from);
        let to_order = self.order_index(&to);

        if to_order < from_order {
            // The edge points backward through the current order; rewrite
            // the disturbed region. Scans are read-only so a detected cycle
            // aborts with zero mutation.
            trace!(
                "edge insertion disturbs order slots [{}, {}]",
                to_order,
                from_order
            );
            let affected_successors = self.scan_forward(&to, from_order)?;
            let affected_predecessors = self.scan_backward(&from, to_order);
            self.commit_reorder(affected_predecessors, affected_successors);
        }

        if let Some(entry) = self.nodes.get_mut(&from) {
            entry.add_outgoing(to.clone());
        }
        if let Some(entry) = self.nodes.get_mut(&to) {
            entry.add_incoming(from);
        }
        Ok(())
    }

    /// Like [`add_edge`](Self::add_edge), reporting failure as a boolean.
    ///
    /// Returns `false` instead of raising [`Error::CycleDetected`]; the
    /// graph is never mutated on failure.
    pub fn try_add_edge(&mut self, from: T, to: T) -> bool {
        self.add_edge(from, to).is_ok()
    }

    /// Removes the edge `from -> to` if present.
    ///
    /// Never fails and never affects the order. Returns `false` if the edge
    /// did not exist.
    pub fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        let removed = self
            .nodes
            .get_mut(from)
            .map_or(false, |entry| entry.remove_outgoing(to));
        if removed {
            if let Some(entry) = self.nodes.get_mut(to) {
                entry.remove_incoming(from);
            }
        }
        removed
    }

    /// Removes every outgoing edge of the given node. No-op if absent.
    pub fn clear_outgoing(&mut self, id: &T) {
        let Some(entry) = self.nodes.get_mut(id) else {
            return;
        };
        for succ in entry.take_outgoing() {
            if let Some(succ_entry) = self.nodes.get_mut(&succ) {
                succ_entry.remove_incoming(id);
            }
        }
    }

    /// Removes every incoming edge of the given node. No-op if absent.
    pub fn clear_incoming(&mut self, id: &T) {
        let Some(entry) = self.nodes.get_mut(id) else {
            return;
        };
        for pred in entry.take_incoming() {
            if let Some(pred_entry) = self.nodes.get_mut(&pred) {
                pred_entry.remove_outgoing(id);
            }
        }
    }

    /// Returns `true` if a directed path of one or more edges leads from
    /// `from` to `to`.
    ///
    /// A node has no path to itself. Returns `false` if either id is absent.
    /// Because the order is always valid, a source positioned after the
    /// target can be rejected in O(1) without any traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("b", "c")?;
    ///
    /// assert!(dag.has_path(&"a", &"c"));
    /// assert!(!dag.has_path(&"c", &"a"));
    /// assert!(!dag.has_path(&"a", &"a"));
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    #[must_use]
    pub fn has_path(&self, from: &T, to: &T) -> bool {
        if from == to {
            return false;
        }
        let (Some(src), Some(dst)) = (self.nodes.get(from), self.nodes.get(to)) else {
            return false;
        };
        // A path can never run backward through a valid order.
        if src.order() > dst.order() {
            return false;
        }
        if src.outgoing().contains(to) {
            return true;
        }

        let target_order = dst.order();
        let mut queue: VecDeque<&T> = src.outgoing().iter().collect();
        let mut visited: HashSet<&T> = HashSet::new();
        while let Some(current) = queue.pop_front() {
            if current == to {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(entry) = self.nodes.get(current) {
                // Anything ordered after the target cannot reach it.
                if entry.order() > target_order {
                    continue;
                }
                queue.extend(entry.outgoing());
            }
        }
        false
    }

    /// Returns the union of the immediate predecessor sets of the given ids.
    ///
    /// The queried ids themselves are excluded from the result, even when
    /// they are each other's neighbors. Absent ids contribute nothing.
    #[must_use]
    pub fn immediate_predecessors_of(&self, ids: &[T]) -> HashSet<T> {
        self.immediate_neighbors(ids, |entry| entry.incoming())
    }

    /// Returns the union of the immediate successor sets of the given ids.
    ///
    /// The queried ids themselves are excluded from the result, even when
    /// they are each other's neighbors. Absent ids contribute nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("a", "c")?;
    /// dag.add_edge("b", "d")?;
    ///
    /// let successors = dag.immediate_successors_of(&["a", "b"]);
    /// // "b" is a successor of "a" but is excluded as a queried id.
    /// assert_eq!(successors.len(), 2);
    /// assert!(successors.contains("c") && successors.contains("d"));
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    #[must_use]
    pub fn immediate_successors_of(&self, ids: &[T]) -> HashSet<T> {
        self.immediate_neighbors(ids, |entry| entry.outgoing())
    }

    /// Returns every node from which any of the given ids can be reached.
    ///
    /// Full transitive closure over incoming edges; the queried ids are
    /// excluded from the result.
    #[must_use]
    pub fn predecessors_of(&self, ids: &[T]) -> HashSet<T> {
        self.closure(ids, |entry| entry.incoming())
    }

    /// Returns every node reachable from any of the given ids.
    ///
    /// Full transitive closure over outgoing edges; the queried ids are
    /// excluded from the result.
    #[must_use]
    pub fn successors_of(&self, ids: &[T]) -> HashSet<T> {
        self.closure(ids, |entry| entry.outgoing())
    }

    /// [`immediate_predecessors_of`](Self::immediate_predecessors_of),
    /// yielded in topological order.
    #[must_use]
    pub fn ordered_immediate_predecessors_of(&self, ids: &[T]) -> Vec<T> {
        self.in_topological_order(self.immediate_predecessors_of(ids))
    }

    /// [`immediate_successors_of`](Self::immediate_successors_of), yielded
    /// in topological order.
    #[must_use]
    pub fn ordered_immediate_successors_of(&self, ids: &[T]) -> Vec<T> {
        self.in_topological_order(self.immediate_successors_of(ids))
    }

    /// [`predecessors_of`](Self::predecessors_of), yielded in topological
    /// order.
    #[must_use]
    pub fn ordered_predecessors_of(&self, ids: &[T]) -> Vec<T> {
        self.in_topological_order(self.predecessors_of(ids))
    }

    /// [`successors_of`](Self::successors_of), yielded in topological order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("b", "c")?;
    /// dag.add_edge("a", "c")?;
    ///
    /// assert_eq!(dag.ordered_successors_of(&["a"]), vec!["b", "c"]);
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    #[must_use]
    pub fn ordered_successors_of(&self, ids: &[T]) -> Vec<T> {
        self.in_topological_order(self.successors_of(ids))
    }

    /// Stable-sorts a caller-supplied id list by current topological order.
    ///
    /// Ids absent from the graph sort to the end, keeping the relative order
    /// in which they were given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("b", "c")?;
    ///
    /// assert_eq!(
    ///     dag.sort_nodes(&["c", "x", "a", "y"]),
    ///     vec!["a", "c", "x", "y"],
    /// );
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    #[must_use]
    pub fn sort_nodes(&self, ids: &[T]) -> Vec<T> {
        let mut sorted = ids.to_vec();
        sorted.sort_by_key(|id| self.order_of(id).unwrap_or(usize::MAX));
        sorted
    }

    /// Returns the node's current position in the topological order, if
    /// present.
    #[must_use]
    pub fn order_of(&self, id: &T) -> Option<usize> {
        self.nodes.get(id).map(NodeEntry::order)
    }

    /// Compares two nodes by their position in the topological order.
    ///
    /// Absent nodes sort after present ones, consistently with
    /// [`sort_nodes`](Self::sort_nodes); two absent nodes compare equal.
    #[must_use]
    pub fn topo_cmp(&self, a: &T, b: &T) -> Ordering {
        match (self.order_of(a), self.order_of(b)) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Returns a snapshot of the current topological order.
    ///
    /// The returned vector is a copy: later mutation of the graph does not
    /// retroactively alter an ordering obtained earlier.
    #[must_use]
    pub fn order(&self) -> Vec<T> {
        self.order.clone()
    }

    /// Iterates over node identities in current topological order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }

    /// Collapses `absorb` into `keep`, redirecting all of its edges.
    ///
    /// Every immediate predecessor of `absorb` becomes an immediate
    /// predecessor of `keep`, every immediate successor of `absorb` becomes
    /// an immediate successor of `keep` (both through the normal edge
    /// insertion path, so the order stays valid incrementally), and `absorb`
    /// is deleted. No-op if the two ids are equal or either is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`], with no change, if a directed path
    /// connects the two nodes in either direction: the collapsed node would
    /// necessarily sit on a cycle through itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("b", "c")?;
    /// dag.add_edge("d", "e")?;
    /// dag.add_edge("e", "f")?;
    ///
    /// dag.merge_nodes(&"b", &"e")?;
    ///
    /// assert!(!dag.contains(&"e"));
    /// assert!(dag.has_edge(&"d", &"b"));
    /// assert!(dag.has_edge(&"b", &"f"));
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    pub fn merge_nodes(&mut self, keep: &T, absorb: &T) -> Result<()> {
        if keep == absorb || !self.contains(keep) || !self.contains(absorb) {
            return Ok(());
        }
        if self.has_path(keep, absorb) || self.has_path(absorb, keep) {
            return Err(Error::CycleDetected);
        }

        let preds: Vec<T> = self.nodes[absorb].incoming().iter().cloned().collect();
        let succs: Vec<T> = self.nodes[absorb].outgoing().iter().cloned().collect();

        // The two-way path check above rules out any cycle these redirected
        // edges could form, so none of the insertions can fail.
        for pred in preds {
            self.add_edge(pred, keep.clone())?;
        }
        for succ in succs {
            self.add_edge(keep.clone(), succ)?;
        }

        self.remove(absorb);
        Ok(())
    }

    /// Like [`merge_nodes`](Self::merge_nodes), reporting failure as a
    /// boolean.
    ///
    /// Returns `false` instead of raising [`Error::CycleDetected`]; the
    /// graph is never mutated on failure.
    pub fn try_merge_nodes(&mut self, keep: &T, absorb: &T) -> bool {
        self.merge_nodes(keep, absorb).is_ok()
    }

    /// Partitions all live nodes into connected subgraphs.
    ///
    /// Nodes are visited in ascending topological order; each not yet
    /// visited node seeds a flood fill along outgoing edges only, and the
    /// nodes it reaches form one component. A node without edges is its own
    /// singleton component. Each component is returned topologically
    /// ordered.
    ///
    /// Seeding in topological order is what lets the outgoing-only fill
    /// discover a weakly connected component transitively from its earliest
    /// member; this traversal policy is part of the method's contract.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dagorder::Dag;
    ///
    /// let mut dag: Dag<&str> = Dag::new();
    /// dag.add_edge("a", "b")?;
    /// dag.add_edge("c", "d")?;
    /// dag.add("lone");
    ///
    /// let components = dag.components();
    /// assert_eq!(components.len(), 3);
    /// assert!(components.contains(&vec!["a", "b"]));
    /// assert!(components.contains(&vec!["lone"]));
    /// # Ok::<(), dagorder::Error>(())
    /// ```
    #[must_use]
    pub fn components(&self) -> Vec<Vec<T>> {
        let mut visited: HashSet<&T> = HashSet::new();
        let mut components = Vec::new();

        for seed in &self.order {
            if visited.contains(seed) {
                continue;
            }
            let mut member_queue = OrderQueue::with_bound(self.order.len());
            let mut stack = vec![seed];
            while let Some(current) = stack.pop() {
                if !visited.insert(current) {
                    continue;
                }
                if let Some(entry) = self.nodes.get(current) {
                    member_queue.insert(entry.order(), current.clone());
                    stack.extend(entry.outgoing());
                }
            }
            components.push(member_queue.into_sorted());
        }
        components
    }

    /// Order index of a node known to be live.
    ///
    /// Falls back to the end of the order for an id that is not present;
    /// callers only invoke this after ensuring the node exists.
    fn order_index(&self, id: &T) -> usize {
        self.nodes.get(id).map_or(self.order.len(), NodeEntry::order)
    }

    /// Forward scan of the Pearce–Kelly affected region.
    ///
    /// Walks outgoing edges from `start`, collecting every reachable node
    /// whose order is below `upper`. Touching a node whose order equals
    /// `upper` means the pending edge would close a loop back to its source:
    /// the scan aborts with [`Error::CycleDetected`] before anything has
    /// been mutated.
    fn scan_forward(&self, start: &T, upper: usize) -> Result<Vec<T>> {
        let mut stack = vec![start];
        let mut visited: HashSet<&T> = HashSet::new();
        let mut affected = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            affected.push(current.clone());

            if let Some(entry) = self.nodes.get(current) {
                for succ in entry.outgoing() {
                    let succ_order = self.order_index(succ);
                    if succ_order == upper {
                        trace!("forward scan reached the edge source: cycle");
                        return Err(Error::CycleDetected);
                    }
                    if succ_order < upper && !visited.contains(succ) {
                        stack.push(succ);
                    }
                }
            }
        }
        Ok(affected)
    }

    /// Backward scan of the Pearce–Kelly affected region.
    ///
    /// Walks incoming edges from `start`, collecting every reachable node
    /// whose order is above `lower`. Purely read-only; cannot fail.
    fn scan_backward(&self, start: &T, lower: usize) -> Vec<T> {
        let mut stack = vec![start];
        let mut visited: HashSet<&T> = HashSet::new();
        let mut affected = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            affected.push(current.clone());

            if let Some(entry) = self.nodes.get(current) {
                for pred in entry.incoming() {
                    if self.order_index(pred) > lower && !visited.contains(pred) {
                        stack.push(pred);
                    }
                }
            }
        }
        affected
    }

    /// Commit phase of the Pearce–Kelly reorder. Infallible.
    ///
    /// Both groups are sorted by current order, then redistributed over the
    /// union of the slots they already occupy: the affected predecessors (of
    /// the edge source) take the lowest slots, the affected successors (of
    /// the edge target) the remaining higher ones. Relative order within
    /// each group is preserved.
    fn commit_reorder(&mut self, mut predecessors: Vec<T>, mut successors: Vec<T>) {
        predecessors.sort_unstable_by_key(|id| self.order_index(id));
        successors.sort_unstable_by_key(|id| self.order_index(id));

        let mut slots: Vec<usize> = predecessors
            .iter()
            .chain(successors.iter())
            .map(|id| self.order_index(id))
            .collect();
        slots.sort_unstable();

        trace!(
            "reassigning {} nodes across {} slots",
            predecessors.len() + successors.len(),
            slots.len()
        );

        for (id, slot) in predecessors.into_iter().chain(successors).zip(slots) {
            if let Some(entry) = self.nodes.get_mut(&id) {
                entry.set_order(slot);
            }
            self.order[slot] = id;
        }
    }

    /// Union of one-step neighbor sets across the query ids, with the query
    /// ids themselves excluded.
    fn immediate_neighbors<'a>(
        &'a self,
        ids: &[T],
        neighbors: impl Fn(&'a NodeEntry<T>) -> &'a HashSet<T>,
    ) -> HashSet<T> {
        let mut result = HashSet::new();
        for id in ids {
            if let Some(entry) = self.nodes.get(id) {
                result = union(result, neighbors(entry));
            }
        }
        for id in ids {
            result.remove(id);
        }
        result
    }

    /// Breadth-first transitive closure across the query ids, with the
    /// query ids themselves excluded.
    fn closure<'a>(
        &'a self,
        ids: &[T],
        neighbors: impl Fn(&'a NodeEntry<T>) -> &'a HashSet<T>,
    ) -> HashSet<T> {
        let mut queue: VecDeque<&T> = VecDeque::new();
        for id in ids {
            if let Some(entry) = self.nodes.get(id) {
                queue.extend(neighbors(entry));
            }
        }

        let mut visited: HashSet<&T> = HashSet::new();
        let mut result = HashSet::new();
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(entry) = self.nodes.get(current) {
                queue.extend(neighbors(entry));
            }
            result.insert(current.clone());
        }

        for id in ids {
            result.remove(id);
        }
        result
    }

    /// Files a result set into the bounded priority sequence keyed by stored
    /// order, yielding it topologically sorted.
    fn in_topological_order(&self, ids: HashSet<T>) -> Vec<T> {
        let mut queue = OrderQueue::with_bound(self.order.len());
        for id in ids {
            if let Some(entry) = self.nodes.get(&id) {
                let order = entry.order();
                queue.insert(order, id);
            }
        }
        queue.into_sorted()
    }
}

impl<T: Eq + Hash + Clone> Default for Dag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for Dag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dag = Dag::new();
        for id in iter {
            dag.add(id);
        }
        dag
    }
}

impl<'a, T: Eq + Hash + Clone> IntoIterator for &'a Dag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
