//! Forest → flat sequence traversal

use std::collections::VecDeque;

use derive_more::Display;

use crate::node::Node;

/// Traversal order for walking a forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    #[default]
    #[display(fmt = "pre-order")]
    PreOrder,
    /// Visit children before parent (bottom-up)
    #[display(fmt = "post-order")]
    PostOrder,
    /// Visit level by level (breadth-first)
    #[display(fmt = "breadth-first")]
    BreadthFirst,
}

struct Frame<'a, D> {
    node: &'a Node<D>,
    depth: usize,
    expanded: bool,
}

impl<'a, D> Frame<'a, D> {
    fn new(node: &'a Node<D>, depth: usize) -> Self {
        Self {
            node,
            depth,
            expanded: false,
        }
    }
}

/// Iterator for walking a forest in different orders
///
/// Uses an explicit deque instead of recursion: the back is the stack for
/// depth-first orders, the front is the queue head for breadth-first. Memory
/// grows with the depth (depth-first) or width (breadth-first) of the forest,
/// never with the call stack.
pub struct Walker<'a, D> {
    order: TraversalOrder,
    pending: VecDeque<Frame<'a, D>>,
}

impl<'a, D> Walker<'a, D> {
    /// Create a new walker over the given roots
    pub fn new(forest: &'a [Node<D>], order: TraversalOrder) -> Self {
        let pending = match order {
            // Roots are popped from the back, so push them reversed
            TraversalOrder::PreOrder | TraversalOrder::PostOrder => {
                forest.iter().rev().map(|n| Frame::new(n, 0)).collect()
            }
            TraversalOrder::BreadthFirst => forest.iter().map(|n| Frame::new(n, 0)).collect(),
        };
        Self { order, pending }
    }

    /// Yield `(depth, node)` pairs instead of bare nodes; roots have depth 0
    pub fn with_depth(self) -> WithDepth<'a, D> {
        WithDepth { inner: self }
    }

    fn next_frame(&mut self) -> Option<(usize, &'a Node<D>)> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }

    fn next_preorder(&mut self) -> Option<(usize, &'a Node<D>)> {
        let current = self.pending.pop_back()?;

        // Add children in reverse order so they're popped in correct order
        for child in current.node.children.iter().rev() {
            self.pending.push_back(Frame::new(child, current.depth + 1));
        }

        Some((current.depth, current.node))
    }

    fn next_postorder(&mut self) -> Option<(usize, &'a Node<D>)> {
        loop {
            let current = self.pending.back_mut()?;
            if current.expanded {
                let done = self.pending.pop_back()?;
                return Some((done.depth, done.node));
            }

            current.expanded = true;
            let (node, depth) = (current.node, current.depth);
            for child in node.children.iter().rev() {
                self.pending.push_back(Frame::new(child, depth + 1));
            }
        }
    }

    fn next_breadthfirst(&mut self) -> Option<(usize, &'a Node<D>)> {
        let current = self.pending.pop_front()?;

        for child in &current.node.children {
            self.pending.push_back(Frame::new(child, current.depth + 1));
        }

        Some((current.depth, current.node))
    }
}

impl<'a, D> Iterator for Walker<'a, D> {
    type Item = &'a Node<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().map(|(_, node)| node)
    }
}

/// [`Walker`] adapter yielding each node with its depth
pub struct WithDepth<'a, D> {
    inner: Walker<'a, D>,
}

impl<'a, D> Iterator for WithDepth<'a, D> {
    type Item = (usize, &'a Node<D>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_frame()
    }
}

/// Walk a forest lazily in the given order
pub fn walk<D>(forest: &[Node<D>], order: TraversalOrder) -> Walker<'_, D> {
    Walker::new(forest, order)
}

/// Collect every node of the forest in the given order
pub fn tree_to_array<D>(forest: &[Node<D>], order: TraversalOrder) -> Vec<&Node<D>> {
    walk(forest, order).collect()
}

/// Depth-first pre-order using an explicit stack
///
/// Parents come before their descendants, siblings left to right. The
/// forest is only borrowed.
pub fn tree_to_array_dfs<D>(forest: &[Node<D>]) -> Vec<&Node<D>> {
    tree_to_array(forest, TraversalOrder::PreOrder)
}

/// Breadth-first using an explicit queue
///
/// Level by level, left to right within a level. The forest is only
/// borrowed.
pub fn tree_to_array_bfs<D>(forest: &[Node<D>]) -> Vec<&Node<D>> {
    tree_to_array(forest, TraversalOrder::BreadthFirst)
}

/// Consuming depth-first pre-order, yielding the payloads without children
pub fn into_array_dfs<D>(forest: Vec<Node<D>>) -> Vec<D> {
    let mut result = Vec::new();
    let mut stack: Vec<Node<D>> = forest.into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        let (data, children) = node.into_parts();
        result.push(data);
        stack.extend(children.into_iter().rev());
    }
    result
}

/// Consuming breadth-first, yielding the payloads without children
pub fn into_array_bfs<D>(forest: Vec<Node<D>>) -> Vec<D> {
    let mut result = Vec::new();
    let mut queue: VecDeque<Node<D>> = forest.into();
    while let Some(node) = queue.pop_front() {
        let (data, children) = node.into_parts();
        result.push(data);
        queue.extend(children);
    }
    result
}

/// Natural recursive pre-order
///
/// Consumes the forest: the nested shape is dissolved and each payload comes
/// out without its children. Recurses once per level of depth, so very deep
/// forests can exhaust the stack; prefer [`into_array_dfs`] for those.
pub fn tree_to_array_recursive<D>(forest: Vec<Node<D>>) -> Vec<D> {
    let mut result = Vec::new();
    collect_preorder(forest, &mut result);
    result
}

fn collect_preorder<D>(forest: Vec<Node<D>>, out: &mut Vec<D>) {
    for node in forest {
        let (data, children) = node.into_parts();
        out.push(data);
        if !children.is_empty() {
            collect_preorder(children, out);
        }
    }
}
