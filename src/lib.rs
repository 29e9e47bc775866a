//! # `arbor` - Classic Data Structures and Graph Algorithms
//!
//! Owned, single-threaded implementations of the textbook structures and the
//! algorithms usually taught alongside them, with instrumentation for
//! comparing them.
//!
//! ## Key Features
//!
//! - **Ordered tree**: a binary search tree that counts duplicates, with four
//!   traversal orders, balance and validity checks, and a text rendering
//! - **Linked lists**: a singly linked list with positional editing and
//!   two-pointer midpoint/cycle detection, and a doubly linked list with O(1)
//!   ends and handle-based removal
//! - **Graph**: labeled, weighted adjacency lists with BFS, DFS, Dijkstra,
//!   cycle detection, Kahn's topological sort, connected components and
//!   all-simple-paths enumeration
//! - **Sort suite**: bubble, selection, insertion, merge, quick and counting
//!   sorts with comparison and swap counters, plus a benchmark runner
//!
//! ## Conventions
//!
//! - Lookups of absent values answer with `false`, `None` or an empty `Vec`.
//!   Only misleading answers and checked preconditions become an [`Error`].
//! - Traversals that could recurse deeply use explicit stacks;
//!   [`Graph::dfs_recursive`] and [`Graph::dfs_paths`] recurse on purpose.
//! - Enable the `tracing` feature to get debug events from the non-obvious
//!   paths (successor promotion, cycle detection, benchmark measurements).
//!
//! ## Example
//!
//! ```
//! use arbor::{Graph, OrderedTree, SinglyLinkedList};
//!
//! let tree: OrderedTree<i32> = [50, 30, 70, 30].into_iter().collect();
//! assert_eq!(tree.in_order(), vec![30, 30, 50, 70]);
//!
//! let list: SinglyLinkedList<i32> = (1..=5).collect();
//! assert_eq!(list.find_middle(), Some(&3));
//!
//! let mut g: Graph<&str, u32> = Graph::directed();
//! g.add_weighted_edge("A", "B", 4);
//! g.add_weighted_edge("A", "C", 1);
//! g.add_weighted_edge("C", "B", 2);
//! let (path, cost) = g.shortest_weighted_path(&"A", &"B")?;
//! assert_eq!((path, cost), (vec!["A", "C", "B"], Some(3)));
//! # Ok::<(), arbor::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
mod trace;

pub mod graph;
pub mod list;
pub mod sort;
pub mod tree;

pub use error::{Error, Result};
pub use graph::{Graph, ShortestPaths};
pub use list::{DoublyLinkedList, NodeHandle, SinglyLinkedList};
pub use sort::bench::{Algorithm, BenchConfig, Measurement, SortStats};
pub use sort::SortReport;
pub use tree::OrderedTree;
