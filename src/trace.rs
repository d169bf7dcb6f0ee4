use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::*;

impl Graph {
    /// Total weight of an explicit trace.
    ///
    /// Every consecutive pair must be joined by an edge, otherwise the whole
    /// trace fails with [Error::NoSuchTrace]. A single node trace weighs 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use tracegraph::{Error, Graph};
    ///
    /// let g: Graph = "AB5, BC4, AD5".parse().unwrap();
    ///
    /// assert_eq!(g.trace_weight(&['A', 'B', 'C']).unwrap(), 9);
    /// assert!(matches!(g.trace_weight(&['A', 'C']), Err(Error::NoSuchTrace { .. })));
    /// ```
    pub fn trace_weight(&self, nodes: &[Node]) -> Result<Weight> {
        nodes.windows(2).try_fold(0, |total, pair| -> Result<Weight> {
            let (from, to) = (pair[0], pair[1]);
            let w = self
                .weight(from, to)
                .ok_or(Error::NoSuchTrace { from, to })?;
            trace!(%from, %to, weight = w, "trace step");
            total.checked_add(w).ok_or(Error::WeightOverflow)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::graph::Graph;

    fn sample() -> Graph {
        "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7".parse().unwrap()
    }

    #[test]
    fn weights() {
        let g = sample();
        assert_eq!(g.trace_weight(&['A', 'B', 'C']).unwrap(), 9);
        assert_eq!(g.trace_weight(&['A', 'D']).unwrap(), 5);
        assert_eq!(g.trace_weight(&['A', 'D', 'C']).unwrap(), 13);
        assert_eq!(g.trace_weight(&['A', 'E', 'B', 'C', 'D']).unwrap(), 22);
    }

    #[test]
    fn single_node() {
        let g = sample();
        assert_eq!(g.trace_weight(&['A']).unwrap(), 0);
        assert_eq!(g.trace_weight(&[]).unwrap(), 0);
    }

    #[test]
    fn missing_edge() {
        let g = sample();
        match g.trace_weight(&['A', 'E', 'D']) {
            Err(Error::NoSuchTrace { from, to }) => assert_eq!((from, to), ('E', 'D')),
            other => panic!("expected NoSuchTrace, got {:?}", other),
        }
    }

    #[test]
    fn unknown_source() {
        let g = sample();
        assert!(matches!(
            g.trace_weight(&['Z', 'A']),
            Err(Error::NoSuchTrace { from: 'Z', to: 'A' })
        ));
    }

    #[test]
    fn overflow() {
        let mut g = Graph::new();
        g.add_edge('A', 'B', u32::MAX);
        g.add_edge('B', 'C', 1);
        assert_eq!(g.trace_weight(&['A', 'B']).unwrap(), u32::MAX);
        assert!(matches!(
            g.trace_weight(&['A', 'B', 'C']),
            Err(Error::WeightOverflow)
        ));
    }

    #[test]
    fn query_errors_leave_graph_usable() {
        let g = sample();
        assert!(g.trace_weight(&['A', 'E', 'D']).is_err());
        assert_eq!(g.trace_weight(&['A', 'B', 'C']).unwrap(), 9);
    }
}
