// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dagorder
//!
//! A mutable directed acyclic graph that keeps a valid topological order at
//! all times, updating it incrementally as edges come and go.
//!
//! Rather than re-sorting after every change, edge insertion uses the
//! Pearce–Kelly algorithm: when a new edge contradicts the current order,
//! only the disturbed region is scanned and rewritten, and a cycle is
//! detected during that same bounded scan. Every operation either completes
//! with all invariants intact or fails with [`Error::CycleDetected`] having
//! changed nothing.
//!
//! ## Features
//!
//! - **Incremental ordering** - edge insertion costs are proportional to the
//!   affected region of the order, not the graph size
//! - **Online cycle detection** - a cycle-forming edge is rejected before any
//!   state is touched, so the graph never passes through an invalid state
//! - **Reachability and neighborhood queries** - direct and transitive, in
//!   either direction, optionally yielded in topological order
//! - **Node merge** - collapse two independent nodes into one, redirecting
//!   all edges while the order stays valid
//! - **Subgraph decomposition** - partition the graph into its connected
//!   components, each topologically ordered
//!
//! Node identities are caller-supplied values of any `Eq + Hash + Clone`
//! type; the graph imposes no id scheme of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use dagorder::{Dag, Error};
//!
//! let mut dag: Dag<&str> = Dag::new();
//!
//! // Endpoints are created on demand.
//! dag.add_edge("parse", "typecheck")?;
//! dag.add_edge("typecheck", "codegen")?;
//! dag.add_edge("parse", "codegen")?;
//!
//! // The order is valid after every mutation.
//! assert_eq!(dag.order(), vec!["parse", "typecheck", "codegen"]);
//!
//! // A cycle-forming edge is rejected with no side effects.
//! assert_eq!(dag.add_edge("codegen", "parse"), Err(Error::CycleDetected));
//! assert!(!dag.has_edge(&"codegen", &"parse"));
//!
//! // Reachability and ordered neighborhood queries.
//! assert!(dag.has_path(&"parse", &"codegen"));
//! assert_eq!(dag.ordered_successors_of(&["parse"]), vec!["typecheck", "codegen"]);
//! # Ok::<(), dagorder::Error>(())
//! ```
//!
//! ## Diagnostics
//!
//! The crate logs its reorder activity through the [`log`] facade at `trace`
//! level; install any `log`-compatible logger to observe which regions of
//! the order an edge insertion disturbs.

pub mod prelude;

mod error;
mod graph;

pub use error::Error;
pub use graph::Dag;

/// A specialized [`Result`](std::result::Result) type for DAG operations.
///
/// # Examples
///
/// ```rust
/// use dagorder::{Dag, Result};
///
/// fn build_pipeline(stages: &[&'static str]) -> Result<Dag<&'static str>> {
///     let mut dag = Dag::new();
///     for pair in stages.windows(2) {
///         dag.add_edge(pair[0], pair[1])?;
///     }
///     Ok(dag)
/// }
///
/// let dag = build_pipeline(&["fetch", "build", "test"])?;
/// assert_eq!(dag.len(), 3);
/// # Ok::<(), dagorder::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;
