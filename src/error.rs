//! Error taxonomy.
//!
//! Only graph-construction failures are fatal. Dead ends during tour
//! building ([`NoCandidates`]) are expected per-agent outcomes and are
//! absorbed by the agent as a failed tour — they never abort a generation.

use crate::graph::NodeId;
use thiserror::Error;

/// Errors raised by graph construction and adjacency queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Construction-time failure: an edge references a node outside the
    /// declared node set, or carries a non-positive distance. Fatal —
    /// a graph that fails construction never reaches the colony.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A distance or trail query for a pair of nodes that are not
    /// adjacent. This is a programming error in the caller, not a
    /// runtime condition the engine produces on its own.
    #[error("unknown edge {from} -> {to}")]
    UnknownEdge {
        /// Queried source node.
        from: NodeId,
        /// Queried target node.
        to: NodeId,
    },
}

/// Raised by the selection policy when the current node has no unvisited
/// neighbor left to move to.
///
/// Carries the node the agent was stuck at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no unvisited candidates from node {0}")]
pub struct NoCandidates(pub NodeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = GraphError::InvalidGraph("distance must be positive".into());
        assert!(e.to_string().contains("invalid graph"));

        let e = GraphError::UnknownEdge { from: 3, to: 7 };
        assert_eq!(e.to_string(), "unknown edge 3 -> 7");

        let e = NoCandidates(5);
        assert_eq!(e.to_string(), "no unvisited candidates from node 5");
    }
}
