//! Binary search tree with per-node occurrence counts.
//!
//! Values strictly less than a node live in its left subtree; values greater
//! than or equal to it live in its right subtree. Equal values never create a
//! second node: the existing node's `count` is bumped instead, so the tree is a
//! multiset keyed by `<`.
//!
//! Children are exclusively owned (`Option<Box<Node<T>>>`). All descents are
//! loops over `&mut Link<T>` rather than recursion, and `Clone`, `Debug` and
//! `Drop` walk explicit stacks, so a degenerate (list-shaped) tree cannot
//! exhaust the call stack.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(h)\) | duplicate bumps a counter |
//! | `search` | \(O(h)\) | |
//! | `delete` | \(O(h)\) | two-child case promotes the in-order successor |
//! | `find_min` / `find_max` | \(O(h)\) | |
//! | traversals | \(O(n)\) | one entry per stored occurrence |

use core::cmp::Ordering;
use core::fmt;

use crate::trace::debug_event;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A tree node: a value, how many times it is stored, and its two subtrees.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) count: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            count: 1,
            left: None,
            right: None,
        }
    }
}

/// An ordered multiset backed by an unbalanced binary search tree.
///
/// ```
/// use arbor::OrderedTree;
///
/// let tree: OrderedTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
/// assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70, 80]);
/// assert_eq!(tree.height(), 2);
/// assert!(tree.is_valid_bst());
/// ```
pub struct OrderedTree<T> {
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of stored occurrences, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        // Unlink iteratively so dropping a deep tree does not recurse.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Smallest stored value.
    pub fn find_min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Largest stored value.
    pub fn find_max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Inserts one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        let link = locate(&mut self.root, &value);
        match link {
            Some(node) => node.count += 1,
            None => *link = Some(Box::new(Node::leaf(value))),
        }
        self.len += 1;
    }

    /// Returns `true` if at least one occurrence of `value` is stored.
    pub fn search(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Alias for [`search`](Self::search).
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Number of stored occurrences of `value`.
    pub fn count(&self, value: &T) -> usize {
        self.find(value).map_or(0, |node| node.count)
    }

    /// Removes one occurrence of `value`.
    ///
    /// Returns `false` (and leaves the tree untouched) if `value` is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let link = locate(&mut self.root, value);
        let Some(node) = link else {
            return false;
        };
        if node.count > 1 {
            node.count -= 1;
        } else {
            unlink(link);
        }
        self.len -= 1;
        true
    }

    /// Smallest stored value strictly greater than `value`.
    pub fn successor(&self, value: &T) -> Option<&T> {
        let mut best = None;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if node.value > *value {
                best = Some(&node.value);
                cursor = node.left.as_deref();
            } else {
                cursor = node.right.as_deref();
            }
        }
        best
    }

    fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }
}

/// Descends from `link` to the slot holding `value`, or to the empty slot where
/// it would be inserted.
fn locate<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return link,
        };
        if ordering == Ordering::Equal {
            return link;
        }
        let Some(node) = link else {
            return link;
        };
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
}

/// Removes the node in `link` entirely, keeping its subtrees in order.
fn unlink<T>(link: &mut Link<T>) {
    let Some(mut node) = link.take() else {
        return;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            // `right` is non-empty, so a minimum always exists.
            if let Some(successor) = take_min(&mut right) {
                debug_event!(count = successor.count, "promoting in-order successor");
                node.value = successor.value;
                node.count = successor.count;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
}

/// Detaches the leftmost node under `link`, splicing its right child into its
/// place.
fn take_min<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = link else {
            break;
        };
        link = &mut node.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    fn clone(&self) -> Self {
        // Pre-order copy: each source node is paired with the empty slot its
        // copy goes into.
        let mut root: Link<T> = None;
        let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
        if let Some(node) = self.root.as_deref() {
            pending.push((node, &mut root));
        }
        while let Some((source, slot)) = pending.pop() {
            let copy = slot.insert(Box::new(Node::leaf(source.value.clone())));
            copy.count = source.count;
            let Node { left, right, .. } = &mut **copy;
            if let Some(child) = source.right.as_deref() {
                pending.push((child, right));
            }
            if let Some(child) = source.left.as_deref() {
                pending.push((child, left));
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
