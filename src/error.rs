//! Crate-wide error type.
//!
//! Lookups of absent values never produce an error: they answer with `false`,
//! `None`, or an empty sequence. Errors are reserved for requests whose answer
//! would be misleading (a partial topological order) and for violated
//! preconditions the caller asked us to check.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by `arbor` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Topological order was requested on an undirected graph.
    #[error("topological sort requires a directed graph")]
    UndirectedGraph,

    /// Kahn's algorithm stalled because the graph contains a cycle.
    #[error("graph contains a cycle: only {ordered} of {nodes} nodes could be ordered")]
    CycleDetected {
        /// Nodes that were emitted before the queue ran dry.
        ordered: usize,
        /// Total nodes in the graph.
        nodes: usize,
    },

    /// Dijkstra was run on a graph with a negative edge weight.
    ///
    /// Weights that do not compare with zero (NaN) are rejected the same way.
    #[error("edge {from} -> {to} has a negative or unordered weight")]
    NegativeWeight {
        /// Debug rendering of the edge source.
        from: String,
        /// Debug rendering of the edge target.
        to: String,
    },

    /// Every path Dijkstra found to a node has a length the weight type
    /// cannot represent.
    #[error("shortest distance to {node} overflows the weight type")]
    DistanceOverflow {
        /// Debug rendering of the node.
        node: String,
    },

    /// A positional argument does not address an existing element.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the structure.
        len: usize,
    },

    /// Counting sort received a negative integer.
    #[error("counting sort requires non-negative integers")]
    NegativeValue,

    /// Counting sort received a value above the configured bound.
    #[error("value {value} exceeds the counting sort limit of {limit}")]
    ValueTooLarge {
        /// The offending value.
        value: usize,
        /// The largest value the counting array may hold.
        limit: usize,
    },
}
