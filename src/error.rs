use thiserror::Error;

/// The error type for all fallible operations on a [`Dag`](crate::Dag).
///
/// Only mutations that would violate acyclicity can fail. Everything else in
/// the API (deleting absent nodes, removing non-existent edges, querying ids
/// the graph has never seen) is defined as a no-op or an empty result, so
/// this enum carries a single variant.
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
/// # Ok::<(), dagorder::Error>(())
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested mutation would introduce a cycle into the graph.
    ///
    /// Raised by [`Dag::add_edge`](crate::Dag::add_edge) when the new edge
    /// would close a directed loop (including the self-loop case), and by
    /// [`Dag::merge_nodes`](crate::Dag::merge_nodes) when a directed path
    /// already connects the two nodes in either direction.
    ///
    /// On this error the graph is left exactly as it was: no partial edge
    /// registration, no partial reorder. Callers that prefer a boolean over
    /// an error can use the `try_` twins of both operations.
    #[error("the requested change would introduce a cycle into the graph")]
    CycleDetected,
}
