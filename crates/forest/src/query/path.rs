//! Root-to-node path lookup

use derive_more::Display;

use crate::keys::RecordKeys;
use crate::node::Node;

/// What each element of a looked-up path holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum PathMode {
    /// Identifiers only
    #[default]
    #[display(fmt = "ids")]
    Ids,
    /// References to the nodes themselves
    #[display(fmt = "nodes")]
    Nodes,
}

/// A root-first path ending at the matched node
#[derive(Debug, Clone, PartialEq)]
pub enum NodePath<'a, D, I> {
    /// Identifiers of the nodes along the path, `None` where a node has none
    Ids(Vec<Option<I>>),
    /// The nodes along the path
    Nodes(Vec<&'a Node<D>>),
}

impl<'a, D, I> NodePath<'a, D, I> {
    /// Number of elements in the path
    pub fn len(&self) -> usize {
        match self {
            NodePath::Ids(ids) => ids.len(),
            NodePath::Nodes(nodes) => nodes.len(),
        }
    }

    /// Returns true if the target was not found
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The identifiers, if this path was looked up in [`PathMode::Ids`]
    pub fn into_ids(self) -> Option<Vec<Option<I>>> {
        match self {
            NodePath::Ids(ids) => Some(ids),
            NodePath::Nodes(_) => None,
        }
    }

    /// The nodes, if this path was looked up in [`PathMode::Nodes`]
    pub fn into_nodes(self) -> Option<Vec<&'a Node<D>>> {
        match self {
            NodePath::Nodes(nodes) => Some(nodes),
            NodePath::Ids(_) => None,
        }
    }
}

/// Path from a root to the first node, in pre-order, whose payload matches
///
/// Returns an empty path when nothing matches. The search keeps its own stack
/// and a path buffer that is truncated on backtrack, so it does not recurse.
pub fn find_path<D, P>(forest: &[Node<D>], mut matches: P) -> Vec<&Node<D>>
where
    P: FnMut(&D) -> bool,
{
    let mut path: Vec<&Node<D>> = Vec::new();
    let mut stack: Vec<(&Node<D>, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node);
        if matches(&node.data) {
            return path;
        }
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }

    Vec::new()
}

/// Identifiers from a root down to the first node carrying `target`
///
/// There is one entry per level; a node on the path that carries no
/// identifier contributes `None`.
pub fn find_id_path<D, K>(forest: &[Node<D>], target: &K::Id, keys: &K) -> Vec<Option<K::Id>>
where
    K: RecordKeys<D>,
{
    find_path(forest, |data| keys.has_id(data, target))
        .into_iter()
        .map(|node| keys.id(&node.data))
        .collect()
}

/// Look up the path to `target` as identifiers or node references
///
/// # Example
///
/// ```
/// use forest::{keys, node_path, Node, PathMode};
///
/// let forest = vec![Node::new((1, 0)).child(Node::new((2, 1)).child(Node::new((3, 2))))];
/// let k = keys(|r: &(u8, u8)| r.0, |r: &(u8, u8)| r.1);
///
/// let ids = node_path(&forest, &3, &k, PathMode::Ids);
/// assert_eq!(ids.into_ids(), Some(vec![Some(1), Some(2), Some(3)]));
///
/// let missing = node_path(&forest, &9, &k, PathMode::Nodes);
/// assert!(missing.is_empty());
/// ```
pub fn node_path<'a, D, K>(
    forest: &'a [Node<D>],
    target: &K::Id,
    keys: &K,
    mode: PathMode,
) -> NodePath<'a, D, K::Id>
where
    K: RecordKeys<D>,
{
    match mode {
        PathMode::Ids => NodePath::Ids(find_id_path(forest, target, keys)),
        PathMode::Nodes => NodePath::Nodes(find_path(forest, |data| keys.has_id(data, target))),
    }
}
