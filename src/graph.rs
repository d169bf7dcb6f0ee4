use std::collections::HashMap;

/// Single character node identifier
pub type Node = char;

/// Non-negative edge weight
pub type Weight = u32;

/// Directed, weighted graph stored as an adjacency map.
///
/// Only nodes that were given as an edge source (or registered with
/// [Graph::add_node]) have an entry. A node that only ever appeared as a
/// destination is unknown to [Graph::neighbors].
///
/// # Examples
///
/// ```
/// use tracegraph::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge('A', 'B', 5);
///
/// assert_eq!(g.weight('A', 'B'), Some(5));
/// assert!(g.neighbors('A').is_some());
/// assert!(g.neighbors('B').is_none()); // destination only
/// ```
#[derive(Debug, Default, Clone)]
pub struct Graph {
    adjacency: HashMap<Node, HashMap<Node, Weight>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::default(),
        }
    }

    /// Insert the edge `source -> destination`, replacing any weight already
    /// recorded for that pair.
    pub fn add_edge(&mut self, source: Node, destination: Node, weight: Weight) {
        self.adjacency
            .entry(source)
            .or_default()
            .insert(destination, weight);
    }

    /// Register `node` as known with no outgoing edges. Existing edges are kept.
    pub fn add_node(&mut self, node: Node) {
        self.adjacency.entry(node).or_default();
    }

    /// Outgoing edges of `node`, or `None` if the node has no entry.
    pub fn neighbors(&self, node: Node) -> Option<&HashMap<Node, Weight>> {
        self.adjacency.get(&node)
    }

    pub fn weight(&self, source: Node, destination: Node) -> Option<Weight> {
        self.neighbors(source)?.get(&destination).copied()
    }

    /// Known nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn contains(&self, node: Node) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of known nodes
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum()
    }
}
