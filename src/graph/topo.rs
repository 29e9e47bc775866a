//! Topological ordering (Kahn's algorithm).

use std::collections::VecDeque;

use super::Graph;
use crate::trace::debug_event;
use crate::{Error, Result};

impl<N: Clone, W> Graph<N, W> {
    /// Orders the nodes so that every edge `u -> v` has `u` before `v`.
    ///
    /// Sources are seeded in node insertion order, so the result is
    /// deterministic.
    ///
    /// # Errors
    ///
    /// - [`Error::UndirectedGraph`] if the graph is undirected.
    /// - [`Error::CycleDetected`] if fewer than all nodes could be ordered.
    ///
    /// ### Performance Characteristics
    /// | Operation | Complexity |
    /// |-----------|------------|
    /// | `topological_sort` | \(O(V + E)\) |
    pub fn topological_sort(&self) -> Result<Vec<N>> {
        if !self.is_directed() {
            return Err(Error::UndirectedGraph);
        }

        let n = self.node_count();
        let mut indeg = vec![0usize; n];
        for u in 0..n {
            for &(v, _) in self.out_edges(u) {
                indeg[v] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();
        let mut order = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            for &(v, _) in self.out_edges(u) {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        if order.len() < n {
            debug_event!(ordered = order.len(), nodes = n, "cycle blocks topological sort");
            return Err(Error::CycleDetected {
                ordered: order.len(),
                nodes: n,
            });
        }
        Ok(self.labels_of(&order))
    }
}
