//! Doubly linked list with O(1) work at both ends.
//!
//! Nodes live in an [`Arena`]. The `next` link is the forward chain; the `prev`
//! link is only an observation used for backward walks and O(1) unlinking,
//! never for ownership. Removal goes through the arena, so no node is freed
//! twice and there is no reference cycle to leak.
//!
//! Invariant: `head.prev` and `tail.next` are `None`, and for every node `n`
//! with a successor, `n.next.prev == n`. [`validate_links`] checks it.
//!
//! [`validate_links`]: DoublyLinkedList::validate_links

use core::fmt;

use super::arena::Arena;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Handle to a node returned by [`DoublyLinkedList::append`] and
/// [`DoublyLinkedList::prepend`].
///
/// A handle goes stale once its node is removed; stale handles resolve to
/// nothing even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: usize,
    generation: u32,
}

/// A doubly linked list with head and tail pointers.
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
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

    /// Removes every element. Outstanding handles go stale.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    fn handle(&self, index: usize) -> NodeHandle {
        NodeHandle {
            index,
            generation: self.nodes.generation(index).unwrap_or_default(),
        }
    }

    fn resolve(&self, handle: NodeHandle) -> Option<usize> {
        (self.nodes.generation(handle.index)? == handle.generation).then_some(handle.index)
    }

    /// Appends in O(1) via the tail pointer.
    pub fn append(&mut self, value: T) -> NodeHandle {
        let old_tail = self.tail;
        let (index, generation) = self.nodes.insert(Node {
            value,
            prev: old_tail,
            next: None,
        });
        match old_tail.and_then(|t| self.nodes.get_mut(t)) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        NodeHandle { index, generation }
    }

    /// Prepends in O(1).
    pub fn prepend(&mut self, value: T) -> NodeHandle {
        let old_head = self.head;
        let (index, generation) = self.nodes.insert(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head.and_then(|h| self.nodes.get_mut(h)) {
            Some(head) => head.prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        NodeHandle { index, generation }
    }

    /// Unlinks the node behind `handle` in O(1) and returns its value.
    ///
    /// Returns `None` for a stale handle.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<T> {
        let index = self.resolve(handle)?;
        self.unlink(index)
    }

    /// Rewrites the neighbours' links around `index`, fixing up head and tail
    /// at the boundaries, then frees the slot.
    fn unlink(&mut self, index: usize) -> Option<T> {
        let node = self.nodes.remove(index)?;
        match node.prev.and_then(|p| self.nodes.get_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.nodes.get_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// First element.
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head?).map(|node| &node.value)
    }

    /// Last element.
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail?).map(|node| &node.value)
    }

    /// Value behind `handle`, if the handle is still live.
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        self.nodes.get(self.resolve(handle)?).map(|node| &node.value)
    }

    /// Mutable value behind `handle`, if the handle is still live.
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        self.nodes.get_mut(index).map(|node| &mut node.value)
    }

    /// Handle of the first node.
    pub fn head_handle(&self) -> Option<NodeHandle> {
        self.head.map(|index| self.handle(index))
    }

    /// Handle of the last node.
    pub fn tail_handle(&self) -> Option<NodeHandle> {
        self.tail.map(|index| self.handle(index))
    }

    /// Head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
            forward: true,
        }
    }

    /// Tail to head.
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.tail,
            remaining: self.len(),
            forward: false,
        }
    }

    /// Checks the boundary and `next.prev == self` invariants and that the
    /// forward walk reaches exactly `len` nodes ending at the tail.
    pub fn validate_links(&self) -> bool {
        if let Some(head) = self.head.and_then(|h| self.nodes.get(h)) {
            if head.prev.is_some() {
                return false;
            }
        }
        if let Some(tail) = self.tail.and_then(|t| self.nodes.get(t)) {
            if tail.next.is_some() {
                return false;
            }
        }
        if self.head.is_none() != self.tail.is_none() {
            return false;
        }

        let mut seen = 0usize;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let Some(node) = self.nodes.get(index) else {
                return false;
            };
            seen += 1;
            if seen > self.len() {
                return false;
            }
            if let Some(next) = node.next {
                match self.nodes.get(next) {
                    Some(succ) if succ.prev == Some(index) => {}
                    _ => return false,
                }
            }
            last = Some(index);
            cursor = node.next;
        }
        seen == self.len() && last == self.tail
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Unlinks the first element equal to `value`; `false` if none matched.
    pub fn delete_value(&mut self, value: &T) -> bool {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let Some(node) = self.nodes.get(index) else {
                break;
            };
            if node.value == *value {
                return self.unlink(index).is_some();
            }
            cursor = node.next;
        }
        false
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Values head to tail.
    pub fn forward(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Values tail to head, following `prev` links.
    pub fn backward(&self) -> Vec<T> {
        self.iter_rev().cloned().collect()
    }
}

/// Iterator over a [`DoublyLinkedList`] in either direction.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
    forward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.cursor?)?;
        self.remaining -= 1;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("None ⇄ ")?;
        for value in self {
            write!(f, "{value} ⇄ ")?;
        }
        f.write_str("None")
    }
}
