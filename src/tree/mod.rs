//! Ordered tree: a binary search tree that counts duplicates.
//!
//! - `bst`: node ownership, insertion, lookup, deletion
//! - `traversal`: the four traversal orders plus height, balance and validity checks
//! - `render`: line-drawing visualization

mod bst;
mod render;
mod traversal;

pub use bst::OrderedTree;
pub use traversal::Iter;
