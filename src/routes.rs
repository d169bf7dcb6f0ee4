use std::collections::HashSet;

use tracing::trace;

use crate::graph::*;

impl Graph {
    /// Simple cycles through `start`, found by depth-first search.
    ///
    /// Each route lists the nodes from `start` up to the last node before the
    /// edge back to `start`; the closing `start` is not included. No node is
    /// visited twice within one route, so cycles that revisit an intermediate
    /// node are not reported. A self-loop on `start` is not a route either.
    pub fn cycles_through(&self, start: Node) -> Vec<Vec<Node>> {
        let mut routes = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        fn dfs(
            graph: &Graph,
            start: Node,
            node: Node,
            visited: &mut HashSet<Node>,
            stack: &mut Vec<Node>,
            routes: &mut Vec<Vec<Node>>,
        ) {
            visited.insert(node);
            stack.push(node);

            if let Some(next) = graph.neighbors(node) {
                for &n in next.keys() {
                    if n == start && stack.len() > 1 {
                        trace!(route = ?stack, "found cycle");
                        routes.push(stack.clone());
                    } else if !visited.contains(&n) {
                        dfs(graph, start, n, visited, stack, routes);
                    }
                }
            }

            visited.remove(&node);
            stack.pop();
        }

        dfs(self, start, start, &mut visited, &mut stack, &mut routes);
        routes
    }
}
