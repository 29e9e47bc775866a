//! Text rendering of an [`OrderedTree`].

use core::fmt;

use super::bst::{Node, OrderedTree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

impl<T: fmt::Display> OrderedTree<T> {
    /// Draws the tree one node per line, root first, left child before right.
    ///
    /// Values stored more than once carry an `(xN)` suffix.
    ///
    /// ```text
    /// └── 50
    ///     ├── 30
    ///     │   └── 20(x2)
    ///     └── 70
    /// ```
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        let mut stack: Vec<(&Node<T>, String, bool)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, String::new(), true));
        }

        while let Some((node, prefix, is_last)) = stack.pop() {
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let mut line = format!("{prefix}{connector}{}", node.value);
            if node.count > 1 {
                line.push_str(&format!("(x{})", node.count));
            }
            lines.push(line);

            let child_prefix = format!("{prefix}{}", if is_last { GAP } else { PIPE });
            let children: Vec<&Node<T>> = node
                .left
                .as_deref()
                .into_iter()
                .chain(node.right.as_deref())
                .collect();
            let last = children.len().saturating_sub(1);
            // Pushed in reverse so the left child is drawn first.
            for (i, child) in children.into_iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i == last));
            }
        }

        lines.join("\n")
    }
}

impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
