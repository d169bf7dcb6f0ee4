//! Queries over a small directed graph whose nodes are single characters and
//! whose edges carry integer weights.
//!
//! ```
//! use tracegraph::Graph;
//!
//! let g: Graph = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
//!
//! assert_eq!(g.trace_weight(&['A', 'D', 'C']).unwrap(), 13);
//! assert_eq!(g.count_with_max_hops('C', 'C', 3), 2);
//! assert_eq!(g.count_with_exact_hops('A', 'C', 4), 3);
//! assert_eq!(g.shortest_distance('A', 'C').unwrap(), Some(9));
//! ```

mod error;
mod graph;
mod hops;
pub mod loader;
mod routes;
mod shortest;
mod trace;

pub use error::{Error, Result};
pub use graph::{Graph, Node, Weight};
