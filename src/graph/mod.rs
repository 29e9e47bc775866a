//! Weighted graphs and the classic traversal algorithms.
//!
//! [`Graph`] stores adjacency lists keyed by arbitrary labels. Algorithms are
//! grouped by concern:
//! - `traversal`: BFS, BFS shortest path and levels, recursive and iterative DFS
//! - `paths`: Dijkstra, weighted shortest path, all simple paths
//! - `cycle`: directed (three-color) and undirected (parent) cycle checks
//! - `topo`: Kahn's topological sort
//! - `components`: connected components

mod adjacency;
mod components;
mod cycle;
mod paths;
mod topo;
mod traversal;

pub use adjacency::{Graph, Weight};
pub use paths::ShortestPaths;
pub use traversal::Bfs;

#[cfg(test)]
mod tests;
