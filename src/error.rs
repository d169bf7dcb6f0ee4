use crate::graph::Node;

/// Result type alias for graph loading and queries.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A consecutive pair of an explicit trace has no recorded edge
    #[error("no edge from {from} to {to}")]
    NoSuchTrace { from: Node, to: Node },

    /// Same-node shortest distance requested for a node that no simple cycle passes through
    #[error("no cycle passes through node {0}")]
    NoCycleFound(Node),

    /// Summed weight does not fit in a [Weight](crate::Weight)
    #[error("total weight overflows")]
    WeightOverflow,

    /// Edge token that is not `<source><destination><digit>`
    #[error("malformed edge token {token:?}")]
    MalformedEdge { token: String },

    #[error("malformed trace {0:?}")]
    MalformedTrace(String),

    #[error("input contains no edge list")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
