//! Incrementally ordered DAG machinery.
//!
//! This module hosts the graph engine and its supporting pieces:
//!
//! - [`Dag`] - the public engine: node and edge mutation with online cycle
//!   detection, reachability and neighborhood queries, node merge, and
//!   connected-subgraph decomposition
//! - [`node`](self::node) - per-node state (order index, adjacency sets)
//! - [`order`](self::order) - the bounded priority sequence used to yield
//!   query results in topological order
//!
//! Only [`Dag`] is public API; the supporting modules are implementation
//! detail.
//!
//! # Design
//!
//! The engine keeps two structures in lock-step: a map from node identity to
//! its entry, and a dense order array mapping each order index back to the
//! identity occupying it. Mutations maintain the topological order
//! incrementally (Pearce–Kelly) instead of re-sorting, so the cost of an edge
//! insertion is bounded by the region of the order it actually disturbs.
//!
//! # Examples
//!
//! ```rust
//! use dagorder::Dag;
//!
//! let mut dag: Dag<u32> = Dag::new();
//! dag.add_edge(1, 2)?;
//! dag.add_edge(2, 3)?;
//!
//! assert!(dag.has_path(&1, &3));
//! assert_eq!(dag.order(), vec![1, 2, 3]);
//! # Ok::<(), dagorder::Error>(())
//! ```

mod dag;
mod node;
mod order;

pub use dag::Dag;
