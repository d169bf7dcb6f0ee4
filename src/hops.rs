//! Walk counting with node and edge revisits allowed.
//!
//! Both counts branch on every outgoing edge, so the work grows as
//! `(max out-degree)^hops` regardless of graph size.

use tracing::debug;

use crate::graph::*;

impl Graph {
    /// Count walks from `start` to `end` using between 1 and `max_hops` edges.
    ///
    /// A walk is counted the first time it lands on `end` and is not extended
    /// past that point. Walks that pass through other nodes keep going until
    /// the hop limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracegraph::Graph;
    ///
    /// let g: Graph = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
    ///
    /// // C-D-C and C-E-B-C
    /// assert_eq!(g.count_with_max_hops('C', 'C', 3), 2);
    /// ```
    pub fn count_with_max_hops(&self, start: Node, end: Node, max_hops: usize) -> usize {
        fn dfs(graph: &Graph, node: Node, end: Node, hops: usize, max_hops: usize) -> usize {
            if node == end && hops > 0 && hops <= max_hops {
                return 1;
            }
            if hops >= max_hops {
                return 0;
            }
            match graph.neighbors(node) {
                Some(next) => next
                    .keys()
                    .map(|&n| dfs(graph, n, end, hops + 1, max_hops))
                    .sum(),
                None => 0,
            }
        }

        let count = dfs(self, start, end, 0, max_hops);
        debug!(%start, %end, max_hops, count, "counted walks with max hops");
        count
    }

    /// Count walks from `start` that are exactly `hops` edges long and finish
    /// on `end`. Passing through `end` earlier does not stop the walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracegraph::Graph;
    ///
    /// let g: Graph = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
    ///
    /// assert_eq!(g.count_with_exact_hops('A', 'C', 4), 3);
    /// assert_eq!(g.count_with_exact_hops('A', 'A', 0), 1);
    /// ```
    pub fn count_with_exact_hops(&self, start: Node, end: Node, hops: usize) -> usize {
        fn dfs(graph: &Graph, node: Node, end: Node, remaining: usize) -> usize {
            if remaining == 0 {
                return (node == end) as usize;
            }
            match graph.neighbors(node) {
                Some(next) => next
                    .keys()
                    .map(|&n| dfs(graph, n, end, remaining - 1))
                    .sum(),
                None => 0,
            }
        }

        let count = dfs(self, start, end, hops);
        debug!(%start, %end, hops, count, "counted walks with exact hops");
        count
    }
}
