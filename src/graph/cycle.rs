//! Cycle detection.

use super::Graph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

impl<N, W> Graph<N, W> {
    /// Returns `true` if the graph contains a cycle.
    ///
    /// Directed graphs use three-color DFS: reaching a node that is still on
    /// the DFS stack (gray) is a back edge. Undirected graphs use DFS with
    /// parent tracking: reaching a visited node other than the one just
    /// arrived from closes a cycle. Self-loops count as cycles in both kinds.
    ///
    /// Both searches use an explicit stack and start from every unvisited
    /// node, so disconnected parts are covered.
    pub fn has_cycle(&self) -> bool {
        if self.is_directed() {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        }
    }

    fn has_directed_cycle(&self) -> bool {
        let mut color = vec![Color::White; self.node_count()];
        // (node, index of the next out-edge to explore)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..self.node_count() {
            if color[root] != Color::White {
                continue;
            }
            color[root] = Color::Gray;
            stack.push((root, 0));

            while let Some(top) = stack.last_mut() {
                let (u, next) = *top;
                match self.out_edges(u).get(next) {
                    Some(&(v, _)) => {
                        top.1 += 1;
                        match color[v] {
                            Color::Gray => return true,
                            Color::White => {
                                color[v] = Color::Gray;
                                stack.push((v, 0));
                            }
                            Color::Black => {}
                        }
                    }
                    None => {
                        color[u] = Color::Black;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut visited = vec![false; self.node_count()];
        // (node, parent, index of the next edge to explore)
        let mut stack: Vec<(usize, Option<usize>, usize)> = Vec::new();

        for root in 0..self.node_count() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, None, 0));

            while let Some(top) = stack.last_mut() {
                let (u, parent, next) = *top;
                let Some(&(v, _)) = self.out_edges(u).get(next) else {
                    stack.pop();
                    continue;
                };
                top.2 += 1;
                if !visited[v] {
                    visited[v] = true;
                    stack.push((v, Some(u), 0));
                } else if Some(v) != parent {
                    return true;
                }
            }
        }
        false
    }
}
