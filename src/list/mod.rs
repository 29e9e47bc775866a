//! Linked lists backed by a slot arena.
//!
//! - `singly`: positional editing, sorted insertion, two-pointer midpoint and
//!   cycle detection, in-place reversal
//! - `doubly`: O(1) ends and O(1) unlinking through generational handles

mod arena;
pub mod doubly;
pub mod singly;

pub use doubly::{DoublyLinkedList, NodeHandle};
pub use singly::SinglyLinkedList;
