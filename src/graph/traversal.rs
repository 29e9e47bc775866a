//! Breadth-first and depth-first traversals.
//!
//! Every traversal yields each reachable node exactly once, neighbors taken in
//! adjacency order. An unknown start yields nothing.

use core::hash::Hash;
use std::collections::VecDeque;

use super::Graph;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields node labels in BFS order. Nodes are marked visited when enqueued,
/// so each one is yielded once.
pub struct Bfs<'g, N, W> {
    graph: &'g Graph<N, W>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'g, N: Eq + Hash + Clone, W> Bfs<'g, N, W> {
    /// Creates a BFS iterator starting from `start`.
    pub fn new(graph: &'g Graph<N, W>, start: &N) -> Self {
        let mut visited = vec![false; graph.node_count()];
        let mut queue = VecDeque::new();
        if let Some(id) = graph.id(start) {
            visited[id] = true;
            queue.push_back(id);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'g, N, W> Iterator for Bfs<'g, N, W> {
    type Item = &'g N;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for &(v, _) in self.graph.out_edges(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }
        Some(self.graph.label(u))
    }
}

impl<N: Eq + Hash + Clone, W> Graph<N, W> {
    /// Lazily walks the graph breadth-first from `start`.
    pub fn bfs_iter(&self, start: &N) -> Bfs<'_, N, W> {
        Bfs::new(self, start)
    }

    /// Nodes reachable from `start` in BFS order.
    pub fn bfs(&self, start: &N) -> Vec<N> {
        self.bfs_iter(start).cloned().collect()
    }

    /// Fewest-edge path from `start` to `end`, both endpoints included.
    ///
    /// Returns `[start]` when `start == end` and an empty path when `end` is
    /// unreachable or either node is unknown. The search stops as soon as
    /// `end` is discovered.
    pub fn bfs_shortest_path(&self, start: &N, end: &N) -> Vec<N> {
        let (Some(source), Some(target)) = (self.id(start), self.id(end)) else {
            return Vec::new();
        };
        if source == target {
            return vec![start.clone()];
        }

        let mut parent: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = queue.pop_front() {
            for &(v, _) in self.out_edges(u) {
                if visited[v] {
                    continue;
                }
                visited[v] = true;
                parent[v] = Some(u);
                if v == target {
                    return self.labels_of(&walk_back(&parent, target));
                }
                queue.push_back(v);
            }
        }
        Vec::new()
    }

    /// Reachable nodes grouped by BFS distance from `start`.
    ///
    /// `levels[0]` is `[start]`; each later level lists nodes in discovery
    /// order.
    pub fn bfs_level_order(&self, start: &N) -> Vec<Vec<N>> {
        let Some(source) = self.id(start) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.node_count()];
        visited[source] = true;

        let mut levels = Vec::new();
        let mut frontier = vec![source];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &u in &frontier {
                for &(v, _) in self.out_edges(u) {
                    if !visited[v] {
                        visited[v] = true;
                        next.push(v);
                    }
                }
            }
            levels.push(self.labels_of(&frontier));
            frontier = next;
        }
        levels
    }

    /// Depth-first pre-order from `start`, descending into neighbors in
    /// adjacency order.
    ///
    /// Recursion depth grows with the longest explored path; prefer
    /// [`dfs_iterative`](Self::dfs_iterative) on deep graphs.
    pub fn dfs_recursive(&self, start: &N) -> Vec<N> {
        let Some(source) = self.id(start) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.node_count()];
        let mut order = Vec::new();
        self.dfs_visit(source, &mut visited, &mut order);
        self.labels_of(&order)
    }

    fn dfs_visit(&self, u: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[u] = true;
        order.push(u);
        for &(v, _) in self.out_edges(u) {
            if !visited[v] {
                self.dfs_visit(v, visited, order);
            }
        }
    }

    /// Depth-first pre-order from `start` with an explicit stack.
    ///
    /// Neighbors are pushed in reverse adjacency order, so the visitation
    /// order matches [`dfs_recursive`](Self::dfs_recursive).
    pub fn dfs_iterative(&self, start: &N) -> Vec<N> {
        let Some(source) = self.id(start) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.node_count()];
        let mut order = Vec::new();
        let mut stack = vec![source];

        while let Some(u) = stack.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            order.push(u);
            for &(v, _) in self.out_edges(u).iter().rev() {
                if !visited[v] {
                    stack.push(v);
                }
            }
        }
        self.labels_of(&order)
    }
}

/// Follows `parent` links from `target` back to the root, returned root first.
pub(crate) fn walk_back(parent: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut cursor = target;
    while let Some(p) = parent[cursor] {
        path.push(p);
        cursor = p;
    }
    path.reverse();
    path
}
