//! Connected components.

use std::collections::VecDeque;

use super::Graph;

impl<N: Clone, W> Graph<N, W> {
    /// Partitions the nodes into connected components.
    ///
    /// Components come in order of their first node's insertion; each lists
    /// its nodes in BFS discovery order. For a directed graph edges are
    /// followed both ways, giving the weakly connected components.
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let n = self.node_count();
        let reverse = self.is_directed().then(|| self.reverse_adjacency());

        let mut visited = vec![false; n];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            queue.push_back(root);
            let mut members = Vec::new();

            while let Some(u) = queue.pop_front() {
                members.push(u);
                let forward = self.out_edges(u).iter().map(|&(v, _)| v);
                let backward = reverse.iter().flat_map(|rev| rev[u].iter().copied());
                for v in forward.chain(backward) {
                    if !visited[v] {
                        visited[v] = true;
                        queue.push_back(v);
                    }
                }
            }
            components.push(self.labels_of(&members));
        }
        components
    }

    fn reverse_adjacency(&self) -> Vec<Vec<usize>> {
        let mut reverse = vec![Vec::new(); self.node_count()];
        for u in 0..self.node_count() {
            for &(v, _) in self.out_edges(u) {
                reverse[v].push(u);
            }
        }
        reverse
    }
}
