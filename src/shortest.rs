use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::*;

impl Graph {
    /// Minimum total weight of a walk from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` cannot be reached. If `end` was not
    /// reached and some walk had to be dropped because its weight does not
    /// fit in a `u32`, [Error::WeightOverflow] is returned instead. When
    /// `start == end` the answer is the lightest simple cycle through that
    /// node (see [Graph::cycles_through]) and [Error::NoCycleFound] is
    /// returned if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracegraph::Graph;
    ///
    /// let g: Graph = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap();
    ///
    /// assert_eq!(g.shortest_distance('A', 'C').unwrap(), Some(9));
    /// assert_eq!(g.shortest_distance('B', 'B').unwrap(), Some(9));
    /// assert_eq!(g.shortest_distance('C', 'A').unwrap(), None);
    /// ```
    pub fn shortest_distance(&self, start: Node, end: Node) -> Result<Option<Weight>> {
        if start == end {
            return self.shortest_cycle(start).map(Some);
        }

        // Nodes without an entry are still at infinity.
        let mut dist: HashMap<Node, Weight> = HashMap::new();
        let mut frontier = BinaryHeap::new();
        let mut overflowed = false;

        dist.insert(start, 0);
        frontier.push(Reverse((0, start)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if node == end {
                debug!(%start, %end, distance = cost, "shortest distance");
                return Ok(Some(cost));
            }

            // Skip stale entries whose distance was already improved.
            if dist.get(&node).map_or(false, |&d| cost > d) {
                continue;
            }

            if let Some(next) = self.neighbors(node) {
                for (&n, &w) in next {
                    let candidate = match cost.checked_add(w) {
                        Some(c) => c,
                        None => {
                            overflowed = true;
                            continue;
                        }
                    };
                    if dist.get(&n).map_or(true, |&d| candidate < d) {
                        trace!(%node, next = %n, distance = candidate, "relax");
                        dist.insert(n, candidate);
                        frontier.push(Reverse((candidate, n)));
                    }
                }
            }
        }

        // Any path through an overflowing edge is heavier than one that fits.
        if overflowed {
            return Err(Error::WeightOverflow);
        }
        debug!(%start, %end, "unreachable");
        Ok(None)
    }

    /// Weight of the lightest simple cycle through `node`.
    fn shortest_cycle(&self, node: Node) -> Result<Weight> {
        let mut best = None;
        for mut route in self.cycles_through(node) {
            route.push(node);
            let w = self.trace_weight(&route)?;
            best = Some(best.map_or(w, |b: Weight| b.min(w)));
        }

        let best = best.ok_or(Error::NoCycleFound(node))?;
        debug!(%node, distance = best, "shortest cycle");
        Ok(best)
    }
}


#[cfg(test)]
mod property_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::graph::{Graph, Node, Weight};

    const NODES: [Node; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

    fn random_graph(rng: &mut StdRng) -> Graph {
        let mut g = Graph::new();
        for _ in 0..rng.gen_range(0..16) {
            let s = NODES[rng.gen_range(0..NODES.len())];
            let d = NODES[rng.gen_range(0..NODES.len())];
            g.add_edge(s, d, rng.gen_range(0..10));
        }
        g
    }

    /// Minimum weight over all walks of at most `NODES.len()` hops.
    fn brute_force(g: &Graph, start: Node, end: Node) -> Option<Weight> {
        fn walk(
            g: &Graph,
            node: Node,
            end: Node,
            cost: Weight,
            hops: usize,
            best: &mut Option<Weight>,
        ) {
            if hops > 0 && node == end {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            if hops == NODES.len() {
                return;
            }
            if let Some(next) = g.neighbors(node) {
                for (&n, &w) in next {
                    walk(g, n, end, cost + w, hops + 1, best);
                }
            }
        }

        let mut best = None;
        walk(g, start, end, 0, 0, &mut best);
        best
    }

    #[test]
    fn matches_exhaustive_search() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let g = random_graph(&mut rng);
            for &s in &NODES {
                for &e in &NODES {
                    if s == e {
                        continue;
                    }
                    assert_eq!(g.shortest_distance(s, e).unwrap(), brute_force(&g, s, e));
                }
            }
        }
    }
}
