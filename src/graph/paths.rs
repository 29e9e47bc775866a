//! Weighted shortest paths and simple-path enumeration.

use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use std::collections::BinaryHeap;

use super::traversal::walk_back;
use super::{Graph, Weight};
use crate::trace::debug_event;
use crate::{Error, Result};

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first,
/// ties going to the lower node id.
///
/// Scores that are not comparable to themselves (NaN) sort last.
#[derive(Copy, Clone, Debug)]
struct MinScored<W>(W, usize);

impl<W: PartialOrd> PartialEq for MinScored<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for MinScored<W> {}

impl<W: PartialOrd> PartialOrd for MinScored<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for MinScored<W> {
    #[allow(clippy::eq_op)]
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.0, &other.0);
        let by_score = if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a == b {
            Ordering::Equal
        } else {
            match (a != a, b != b) {
                (true, true) | (false, false) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
            }
        };
        by_score.then_with(|| other.1.cmp(&self.1))
    }
}

/// Result of a single-source [`Graph::dijkstra`] run.
///
/// Borrows the graph so answers can be asked for by label.
pub struct ShortestPaths<'g, N, W> {
    graph: &'g Graph<N, W>,
    source: Option<usize>,
    distance: Vec<Option<W>>,
    previous: Vec<Option<usize>>,
}

impl<'g, N: Eq + Hash + Clone, W: Copy> ShortestPaths<'g, N, W> {
    /// The start node, if it exists in the graph.
    pub fn source(&self) -> Option<&'g N> {
        self.source.map(|id| self.graph.label(id))
    }

    /// Shortest distance to `node`; `None` means unreachable (infinite).
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distance[self.graph.id(node)?]
    }

    /// Returns `true` if `node` was reached from the source.
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Predecessor of `node` on its shortest path.
    ///
    /// `None` for the source and for unreachable nodes.
    pub fn previous(&self, node: &N) -> Option<&'g N> {
        let prev = self.previous[self.graph.id(node)?]?;
        Some(self.graph.label(prev))
    }

    /// Shortest path from the source to `node`, both included.
    ///
    /// Empty when `node` is unreachable.
    pub fn path_to(&self, node: &N) -> Vec<N> {
        match self.graph.id(node) {
            Some(target) if self.distance[target].is_some() => {
                self.graph.labels_of(&walk_back(&self.previous, target))
            }
            _ => Vec::new(),
        }
    }

    /// Every node with its distance, in node insertion order.
    pub fn distances(&self) -> impl Iterator<Item = (&'g N, Option<W>)> + '_ {
        let graph = self.graph;
        self.distance
            .iter()
            .enumerate()
            .map(move |(id, d)| (graph.label(id), *d))
    }
}

impl<N: fmt::Debug, W: fmt::Debug> fmt::Debug for ShortestPaths<'_, N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPaths")
            .field("source", &self.source)
            .field("distance", &self.distance)
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

impl<N: Eq + Hash + Clone + fmt::Debug, W: Weight> Graph<N, W> {
    /// Single-source shortest paths.
    ///
    /// Uses a binary min-heap with lazy deletion: stale heap entries are
    /// skipped when popped. Only strictly shorter candidates update a node.
    /// An unknown `start` leaves every node unreachable.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeWeight`] if any edge weight is below zero or NaN; the
    /// check runs before the search. [`Error::DistanceOverflow`] if a node is
    /// reachable only along paths whose length does not fit in `W`.
    ///
    /// ### Performance Characteristics
    /// | Phase | Complexity |
    /// |-------|------------|
    /// | Weight check | \(O(E)\) |
    /// | Search | \(O((V + E) \log V)\) |
    pub fn dijkstra(&self, start: &N) -> Result<ShortestPaths<'_, N, W>> {
        self.check_non_negative()?;

        let n = self.node_count();
        let mut distance: Vec<Option<W>> = vec![None; n];
        let mut previous = vec![None; n];
        let mut settled = vec![false; n];
        // Nodes that some edge reached only with an unrepresentable length.
        let mut overflowed = vec![false; n];
        let source = self.id(start);

        if let Some(s) = source {
            let mut heap = BinaryHeap::new();
            distance[s] = Some(W::zero());
            heap.push(MinScored(W::zero(), s));

            while let Some(MinScored(dist, u)) = heap.pop() {
                if settled[u] {
                    continue;
                }
                settled[u] = true;
                for &(v, weight) in self.out_edges(u) {
                    if settled[v] {
                        continue;
                    }
                    let Some(candidate) = dist.checked_sum(weight) else {
                        overflowed[v] = true;
                        continue;
                    };
                    let shorter = match distance[v] {
                        Some(current) => candidate < current,
                        None => true,
                    };
                    if shorter {
                        distance[v] = Some(candidate);
                        previous[v] = Some(u);
                        heap.push(MinScored(candidate, v));
                    }
                }
            }
            debug_event!(
                reached = settled.iter().filter(|&&s| s).count(),
                nodes = n,
                "dijkstra finished"
            );
        }

        // A representable path always beats an overflowing one, so only nodes
        // left without any distance are unanswerable.
        if let Some(v) = (0..n).find(|&v| overflowed[v] && distance[v].is_none()) {
            let node = format!("{:?}", self.label(v));
            debug_event!(%node, "shortest distance overflowed");
            return Err(Error::DistanceOverflow { node });
        }

        Ok(ShortestPaths {
            graph: self,
            source,
            distance,
            previous,
        })
    }

    /// Shortest weighted path from `start` to `end` and its total weight.
    ///
    /// Returns `(vec![], None)` when `end` is unreachable.
    ///
    /// # Errors
    ///
    /// As for [`dijkstra`](Self::dijkstra).
    pub fn shortest_weighted_path(&self, start: &N, end: &N) -> Result<(Vec<N>, Option<W>)> {
        let paths = self.dijkstra(start)?;
        Ok((paths.path_to(end), paths.distance(end)))
    }

    fn check_non_negative(&self) -> Result<()> {
        for u in 0..self.node_count() {
            for &(v, weight) in self.out_edges(u) {
                if !matches!(
                    weight.partial_cmp(&W::zero()),
                    Some(Ordering::Greater | Ordering::Equal)
                ) {
                    let (from, to) = (format!("{:?}", self.label(u)), format!("{:?}", self.label(v)));
                    debug_event!(%from, %to, "negative edge weight rejected");
                    return Err(Error::NegativeWeight { from, to });
                }
            }
        }
        Ok(())
    }
}

impl<N: Eq + Hash + Clone, W> Graph<N, W> {
    /// Every simple path from `start` to `end`, found by depth-first
    /// backtracking in adjacency order.
    ///
    /// `start == end` gives the single path `[start]`. The number of paths
    /// can grow exponentially with the graph size.
    pub fn dfs_paths(&self, start: &N, end: &N) -> Vec<Vec<N>> {
        let (Some(source), Some(target)) = (self.id(start), self.id(end)) else {
            return Vec::new();
        };
        let mut on_path = vec![false; self.node_count()];
        let mut path = Vec::new();
        let mut found = Vec::new();
        self.extend_paths(source, target, &mut on_path, &mut path, &mut found);
        found.iter().map(|ids| self.labels_of(ids)).collect()
    }

    fn extend_paths(
        &self,
        u: usize,
        target: usize,
        on_path: &mut [bool],
        path: &mut Vec<usize>,
        found: &mut Vec<Vec<usize>>,
    ) {
        path.push(u);
        if u == target {
            found.push(path.clone());
        } else {
            on_path[u] = true;
            for &(v, _) in self.out_edges(u) {
                if !on_path[v] {
                    self.extend_paths(v, target, on_path, path, found);
                }
            }
            on_path[u] = false;
        }
        path.pop();
    }
}
