//! Adjacency-list graph keyed by arbitrary hashable labels.
//!
//! Labels are interned to dense ids on first sight: `labels[id]` gives the
//! label back, `index[label]` gives the id, and `adjacency[id]` holds the
//! outgoing `(neighbor_id, weight)` pairs in insertion order. Every algorithm
//! runs on ids and `Vec<bool>`/`Vec<Option<_>>` side tables, and iterates nodes
//! in insertion order, so results are deterministic.
//!
//! Undirected graphs store each edge as a mirrored pair, one entry in each
//! endpoint's list.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_node` | \(O(1)\) amortized | hash lookup + push |
//! | `add_edge` | \(O(1)\) amortized | parallel edges are kept |
//! | `neighbors` | \(O(\text{out-degree})\) | insertion order |
//! | `has_edge` | \(O(\text{out-degree})\) | linear scan |

use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

use num_traits::{CheckedAdd, One, Zero};

/// Edge weights usable by every algorithm in this module.
///
/// Dijkstra additionally requires weights to be non-negative and checks it.
pub trait Weight: Copy + PartialOrd + Zero {
    /// Adds two path lengths, or `None` if the sum is not representable.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn checked_sum(self, other: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &other)
            }
        }
    )*};
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            // IEEE addition saturates to infinity, which still orders last.
            #[inline]
            fn checked_sum(self, other: Self) -> Option<Self> {
                Some(self + other)
            }
        }
    )*};
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// A directed or undirected weighted graph.
///
/// ```
/// use arbor::Graph;
///
/// let mut g: Graph<&str> = Graph::undirected();
/// g.add_edge("A", "B");
/// g.add_edge("A", "C");
/// g.add_edge("B", "D");
/// assert_eq!(g.bfs(&"A"), vec!["A", "B", "C", "D"]);
/// assert_eq!(g.bfs_shortest_path(&"C", &"D"), vec!["C", "A", "B", "D"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, W = u32> {
    labels: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<(usize, W)>>,
    directed: bool,
    edge_count: usize,
}

impl<N, W> Graph<N, W> {
    /// Creates an empty graph; `directed` fixes the edge semantics for its
    /// whole lifetime.
    pub fn new(directed: bool) -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            directed,
            edge_count: 0,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges added; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.labels.iter()
    }

    pub(crate) fn label(&self, id: usize) -> &N {
        &self.labels[id]
    }

    pub(crate) fn out_edges(&self, id: usize) -> &[(usize, W)] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn labels_of(&self, ids: &[usize]) -> Vec<N>
    where
        N: Clone,
    {
        ids.iter().map(|&id| self.labels[id].clone()).collect()
    }
}

impl<N: Eq + Hash + Clone, W> Graph<N, W> {
    pub(crate) fn id(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Adds `node` if it is not present yet; returns its dense id.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = self.labels.len();
        self.index.insert(node.clone(), id);
        self.labels.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    /// Returns `true` if `node` is in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Outgoing `(neighbor, weight)` pairs of `node` in insertion order.
    ///
    /// Empty for an unknown node.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, &'a W)> + 'a {
        let edges = self.id(node).map_or(&[][..], |id| self.out_edges(id));
        edges.iter().map(move |(to, w)| (&self.labels[*to], w))
    }

    /// Returns `true` if an edge `from -> to` is stored.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.id(from), self.id(to)) {
            (Some(from), Some(to)) => self.out_edges(from).iter().any(|&(v, _)| v == to),
            _ => false,
        }
    }
}

impl<N: Eq + Hash + Clone, W: Copy> Graph<N, W> {
    /// Adds `from -> to` with `weight`, creating either endpoint as needed.
    ///
    /// For an undirected graph the mirror `to -> from` is stored as well.
    pub fn add_weighted_edge(&mut self, from: N, to: N, weight: W) {
        let u = self.add_node(from);
        let v = self.add_node(to);
        self.adjacency[u].push((v, weight));
        if !self.directed {
            self.adjacency[v].push((u, weight));
        }
        self.edge_count += 1;
    }
}

impl<N: Eq + Hash + Clone, W: Copy + One> Graph<N, W> {
    /// Adds `from -> to` with unit weight.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_weighted_edge(from, to, W::one());
    }
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<N: fmt::Display, W: fmt::Display> fmt::Display for Graph<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "Directed" } else { "Undirected" };
        write!(f, "{kind} Graph ({} nodes):", self.labels.len())?;
        for (id, label) in self.labels.iter().enumerate() {
            write!(f, "\n  {label} → [")?;
            for (i, (to, w)) in self.out_edges(id).iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "({}, {w})", self.labels[*to])?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
