//! Singly linked list with positional and value-based editing.
//!
//! Nodes live in an [`Arena`] and point at their successor by slot index, so
//! node identity is the slot index. That is what makes Floyd's cycle check
//! meaningful: [`link_tail_to`](SinglyLinkedList::link_tail_to) can close the
//! list into a loop, and [`has_cycle`](SinglyLinkedList::has_cycle) detects it
//! by comparing slot indices, never values.
//!
//! Every walk other than `has_cycle` visits at most `len` nodes, so a list with
//! a tail link still terminates. Every mutation first drops the tail link, so
//! a freed slot is never reachable again.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `prepend`, `delete_first` | \(O(1)\) |
//! | `append`, `delete_last` | \(O(n)\) |
//! | `insert_at`, `delete_at`, `insert_sorted`, `delete_value` | \(O(n)\) |
//! | `find_middle`, `has_cycle`, `reverse`, `remove_duplicates` | \(O(n)\) time, \(O(1)\) extra space |

use core::fmt;

use super::arena::Arena;
use crate::{Error, Result};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// A singly linked list.
#[derive(Debug, Clone)]
pub struct SinglyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<usize>,
    looped: bool,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            looped: false,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.looped = false;
    }

    fn break_loop(&mut self) {
        if self.looped {
            self.unlink_tail();
        }
    }

    fn next_of(&self, slot: usize) -> Option<usize> {
        self.nodes.get(slot).and_then(|node| node.next)
    }

    fn set_next(&mut self, slot: usize, next: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(slot) {
            node.next = next;
        }
    }

    /// Slot of the element at `index`, if `index < len`.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let mut slot = self.head?;
        for _ in 0..index {
            slot = self.next_of(slot)?;
        }
        Some(slot)
    }

    fn tail_slot(&self) -> Option<usize> {
        self.slot_at(self.len().checked_sub(1)?)
    }

    /// Inserts at the front.
    pub fn prepend(&mut self, value: T) {
        self.break_loop();
        let (slot, _) = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(slot);
    }

    /// Inserts at the back, walking from the head to find the tail.
    pub fn append(&mut self, value: T) {
        self.break_loop();
        let tail = self.tail_slot();
        let (slot, _) = self.nodes.insert(Node { value, next: None });
        match tail {
            Some(tail) => self.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }
    }

    /// Inserts so that the new element ends up at `index`.
    ///
    /// Index `0` prepends; an index at or past the end appends.
    pub fn insert_at(&mut self, index: usize, value: T) {
        self.break_loop();
        if index == 0 || self.is_empty() {
            self.prepend(value);
            return;
        }
        let Some(before) = self.slot_at(index - 1) else {
            self.append(value);
            return;
        };
        let after = self.next_of(before);
        let (slot, _) = self.nodes.insert(Node { value, next: after });
        self.set_next(before, Some(slot));
    }

    /// Removes and returns the first element.
    pub fn delete_first(&mut self) -> Option<T> {
        self.break_loop();
        let head = self.head?;
        let node = self.nodes.remove(head)?;
        self.head = node.next;
        Some(node.value)
    }

    /// Removes and returns the last element.
    pub fn delete_last(&mut self) -> Option<T> {
        let last = self.len().checked_sub(1)?;
        self.delete_at(last)
    }

    /// Removes and returns the element at `index`; `None` if out of range.
    pub fn delete_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        if index == 0 {
            return self.delete_first();
        }
        self.break_loop();
        let before = self.slot_at(index - 1)?;
        let target = self.next_of(before)?;
        let node = self.nodes.remove(target)?;
        self.set_next(before, node.next);
        Some(node.value)
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slot_at(index)?;
        self.nodes.get(slot).map(|node| &node.value)
    }

    /// Iterates front to back, visiting at most `len` elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Middle element by the slow/fast pointer walk.
    ///
    /// For an even length this is the upper middle (index `len / 2`). The
    /// result is only meaningful for an acyclic list.
    pub fn find_middle(&self) -> Option<&T> {
        let mut slow = self.head?;
        let mut fast = self.head;
        let mut budget = self.len();
        while let Some(next) = fast.and_then(|f| self.next_of(f)) {
            if budget == 0 {
                break;
            }
            budget -= 1;
            slow = self.next_of(slow)?;
            fast = self.next_of(next);
        }
        self.nodes.get(slow).map(|node| &node.value)
    }

    /// Floyd's tortoise and hare: `true` if following `next` from the head
    /// ever revisits a node.
    pub fn has_cycle(&self) -> bool {
        let mut slow = self.head;
        let mut fast = self.head;
        while let Some(next) = fast.and_then(|f| self.next_of(f)) {
            slow = slow.and_then(|s| self.next_of(s));
            fast = self.next_of(next);
            if fast.is_some() && slow == fast {
                return true;
            }
        }
        false
    }

    /// Points the tail's `next` at the element at `index`, closing a cycle.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn link_tail_to(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        let target = self
            .slot_at(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        if let Some(tail) = self.tail_slot() {
            self.set_next(tail, Some(target));
        }
        self.looped = true;
        Ok(())
    }

    /// Clears the tail's `next`, breaking any cycle made by
    /// [`link_tail_to`](Self::link_tail_to).
    pub fn unlink_tail(&mut self) {
        if let Some(tail) = self.tail_slot() {
            self.set_next(tail, None);
        }
        self.looped = false;
    }

    /// Reverses the list in place with the `prev`/`current`/`next` walk.
    pub fn reverse(&mut self) {
        self.break_loop();
        let mut prev = None;
        let mut current = self.head;
        for _ in 0..self.len() {
            let Some(slot) = current else {
                break;
            };
            let next = self.next_of(slot);
            self.set_next(slot, prev);
            prev = Some(slot);
            current = next;
        }
        self.head = prev;
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Index of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes the first element equal to `value`; `false` if none matched.
    pub fn delete_value(&mut self, value: &T) -> bool {
        match self.search(value) {
            Some(index) => self.delete_at(index).is_some(),
            None => false,
        }
    }

    /// Drops adjacent equal elements in one pass.
    ///
    /// Only removes every duplicate when the list is sorted; on unsorted input
    /// it still only collapses runs of adjacent equal values.
    pub fn remove_duplicates(&mut self) {
        self.break_loop();
        let Some(mut current) = self.head else {
            return;
        };
        for _ in 0..self.len() {
            let Some(next) = self.next_of(current) else {
                break;
            };
            let same = match (self.nodes.get(current), self.nodes.get(next)) {
                (Some(a), Some(b)) => a.value == b.value,
                _ => false,
            };
            if same {
                let after = self.next_of(next);
                self.nodes.remove(next);
                self.set_next(current, after);
            } else {
                current = next;
            }
        }
    }
}

impl<T: PartialOrd> SinglyLinkedList<T> {
    /// Inserts before the first element greater than or equal to `value`.
    ///
    /// Keeps the list ascending provided it already was; the list is not
    /// checked.
    pub fn insert_sorted(&mut self, value: T) {
        self.break_loop();
        let head_first = match self.head.and_then(|h| self.nodes.get(h)) {
            Some(head) => value <= head.value,
            None => true,
        };
        if head_first {
            self.prepend(value);
            return;
        }

        let Some(mut current) = self.head else {
            return;
        };
        for _ in 1..self.len() {
            let advance = self
                .next_of(current)
                .and_then(|next| self.nodes.get(next).map(|node| (next, node.value < value)));
            match advance {
                Some((next, true)) => current = next,
                _ => break,
            }
        }
        let after = self.next_of(current);
        let (slot, _) = self.nodes.insert(Node { value, next: after });
        self.set_next(current, Some(slot));
    }

    /// Returns `true` if the elements are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for item in iter {
            if item < prev {
                return false;
            }
            prev = item;
        }
        true
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Copies the elements front to back into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Front-to-back iterator over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.cursor?)?;
        self.remaining -= 1;
        self.cursor = node.next;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.break_loop();
        // Track the tail so bulk appends stay linear.
        let mut tail = self.tail_slot();
        for value in iter {
            let (slot, _) = self.nodes.insert(Node { value, next: None });
            match tail {
                Some(prev) => self.set_next(prev, Some(slot)),
                None => self.head = Some(slot),
            }
            tail = Some(slot);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} → ")?;
        }
        f.write_str("None")
    }
}
