//! Leaf enumeration

use crate::node::Node;
use crate::traverse::{walk, TraversalOrder};

/// All leaf nodes, in pre-order
///
/// A leaf is a node with no children; internal nodes never appear.
pub fn tree_leaves<D>(forest: &[Node<D>]) -> Vec<&Node<D>> {
    walk(forest, TraversalOrder::PreOrder)
        .filter(|node| node.is_leaf())
        .collect()
}

/// Consuming variant of [`tree_leaves`], yielding the leaf payloads
pub fn into_leaves<D>(forest: Vec<Node<D>>) -> Vec<D> {
    let mut leaves = Vec::new();
    let mut stack: Vec<Node<D>> = forest.into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        let (data, children) = node.into_parts();
        if children.is_empty() {
            leaves.push(data);
        } else {
            stack.extend(children.into_iter().rev());
        }
    }
    leaves
}
