//! Core node type for nested structures

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single node in a forest
///
/// Generic over the payload type `D`, which can be a typed struct or a
/// dynamic [`Record`](crate::Record). A node owns its children by value, so
/// every node appears in exactly one children collection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<D> {
    /// User-defined data carried by this node
    pub data: D,
    /// Ordered child nodes; empty for a leaf
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Node<D>>,
}

impl<D> Node<D> {
    /// Create a new node without children
    pub fn new(data: D) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Create a new node that owns the given children
    pub fn with_children(data: D, children: Vec<Node<D>>) -> Self {
        Self { data, children }
    }

    /// Create a new leaf node
    pub fn leaf(data: D) -> Self {
        Self::new(data)
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Append a child, keeping insertion order
    pub fn push_child(&mut self, child: Node<D>) {
        self.children.push(child);
    }

    /// Builder-style variant of [`push_child`](Self::push_child)
    pub fn child(mut self, child: Node<D>) -> Self {
        self.children.push(child);
        self
    }

    /// Split the node into its payload and children
    pub fn into_parts(self) -> (D, Vec<Node<D>>) {
        (self.data, self.children)
    }

    /// Convert the payload type while keeping the shape of the subtree
    ///
    /// Recurses once per level of depth.
    pub fn map<E, F>(self, f: F) -> Node<E>
    where
        F: Fn(D) -> E + Copy,
    {
        Node {
            data: f(self.data),
            children: self.children.into_iter().map(|c| c.map(f)).collect(),
        }
    }
}

impl<D: fmt::Display> fmt::Display for Node<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} children)", self.data, self.children.len())
    }
}

impl<D> From<D> for Node<D> {
    fn from(data: D) -> Self {
        Node::new(data)
    }
}

/// Count every node in the forest
pub fn node_count<D>(forest: &[Node<D>]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node<D>> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

/// Maximum depth of the forest
///
/// An empty forest has depth 0, a forest of lone roots has depth 1.
pub fn depth<D>(forest: &[Node<D>]) -> usize {
    let mut max = 0;
    let mut stack: Vec<(&Node<D>, usize)> = forest.iter().map(|n| (n, 1)).collect();
    while let Some((node, level)) = stack.pop() {
        max = max.max(level);
        stack.extend(node.children.iter().map(|c| (c, level + 1)));
    }
    max
}
