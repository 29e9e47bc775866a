//! Traversals and structural diagnostics for [`OrderedTree`].
//!
//! Every walk here uses an explicit stack or queue. Each traversal emits a
//! value once per stored occurrence, so a value inserted three times appears
//! three times in the output.

use std::collections::VecDeque;

use super::bst::{Node, OrderedTree};

/// In-order iterator over an [`OrderedTree`].
///
/// Yields values in non-decreasing order, repeating each according to its
/// occurrence count.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<(&'a Node<T>, usize)>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            current: None,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((node, remaining)) = self.current.as_mut() {
            if *remaining > 0 {
                *remaining -= 1;
                let node: &'a Node<T> = *node;
                return Some(&node.value);
            }
            self.current = None;
        }

        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.current = Some((node, node.count - 1));
        Some(&node.value)
    }
}

enum Frame<'a, T> {
    Enter(Option<&'a Node<T>>),
    Exit(&'a Node<T>),
}

/// Bottom-up fold: `empty` stands in for an absent child, `combine` receives a
/// node with the folded results of its left and right subtrees.
fn fold_post_order<T, A, F>(root: Option<&Node<T>>, empty: A, mut combine: F) -> A
where
    A: Clone,
    F: FnMut(&Node<T>, A, A) -> A,
{
    let mut frames = vec![Frame::Enter(root)];
    let mut results: Vec<A> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(None) => results.push(empty.clone()),
            Frame::Enter(Some(node)) => {
                frames.push(Frame::Exit(node));
                frames.push(Frame::Enter(node.right.as_deref()));
                frames.push(Frame::Enter(node.left.as_deref()));
            }
            Frame::Exit(node) => {
                let right = results.pop().unwrap_or_else(|| empty.clone());
                let left = results.pop().unwrap_or_else(|| empty.clone());
                results.push(combine(node, left, right));
            }
        }
    }

    results.pop().unwrap_or(empty)
}

fn repeat_into<T: Clone>(out: &mut Vec<T>, node: &Node<T>) {
    out.extend(core::iter::repeat(node.value.clone()).take(node.count));
}

impl<T> OrderedTree<T> {
    /// In-order iterator over stored values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Number of distinct values (tree nodes).
    pub fn node_count(&self) -> usize {
        fold_post_order(self.root.as_deref(), 0usize, |_, l, r| 1 + l + r)
    }

    /// Edges on the longest root-to-leaf path; `-1` for an empty tree.
    pub fn height(&self) -> isize {
        fold_post_order(self.root.as_deref(), -1isize, |_, l, r| 1 + l.max(r))
    }

    /// `true` if no node has subtrees whose heights differ by more than one.
    pub fn is_balanced(&self) -> bool {
        // `None` marks an unbalanced subtree and short-circuits upward.
        fold_post_order(self.root.as_deref(), Some(-1isize), |_, l, r| {
            let (l, r) = (l?, r?);
            if (l - r).abs() > 1 {
                None
            } else {
                Some(1 + l.max(r))
            }
        })
        .is_some()
    }
}

impl<T: Clone> OrderedTree<T> {
    /// Left, node, right: the sorted view.
    pub fn in_order(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Node, left, right.
    pub fn pre_order(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            repeat_into(&mut out, node);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Left, right, node.
    pub fn post_order(&self) -> Vec<T> {
        // Reverse of a node, right, left walk.
        let mut nodes = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        let mut out = Vec::new();
        for node in nodes.into_iter().rev() {
            repeat_into(&mut out, node);
        }
        out
    }

    /// Breadth-first, level by level, left to right.
    pub fn level_order(&self) -> Vec<T> {
        let mut out = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            repeat_into(&mut out, node);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Checks the ordering invariant transitively: every node lies in
    /// `[low, high)` where the bounds tighten on the way down.
    pub fn is_valid_bst(&self) -> bool {
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, None, None));
        }
        while let Some((node, low, high)) = stack.pop() {
            if low.is_some_and(|low| node.value < *low) {
                return false;
            }
            if high.is_some_and(|high| node.value >= *high) {
                return false;
            }
            if node.count == 0 {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, low, Some(&node.value)));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, Some(&node.value), high));
            }
        }
        true
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
