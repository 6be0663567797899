//! Common imports for working with [`Dag`].
//!
//! A convenience module re-exporting the handful of items almost every user
//! of the crate needs.
//!
//! # Examples
//!
//! ```rust
//! use dagorder::prelude::*;
//!
//! fn link(dag: &mut Dag<u32>, from: u32, to: u32) -> Result<()> {
//!     dag.add_edge(from, to)
//! }
//!
//! let mut dag = Dag::new();
//! link(&mut dag, 1, 2)?;
//! assert_eq!(link(&mut dag, 2, 1), Err(Error::CycleDetected));
//! # Ok::<(), dagorder::Error>(())
//! ```

pub use crate::{Dag, Error, Result};
