//! Ancestor-preserving structural filter

use crate::node::Node;

/// Keep matching nodes together with the ancestors that lead to them
///
/// Children are filtered first, so the predicate sees nodes bottom-up and
/// each node it is handed already carries only its surviving children. A node
/// survives if the predicate accepts it or if any of its descendants
/// survived; in the latter case it is kept as scaffolding carrying only the
/// surviving descendants.
///
/// Consumes the forest and returns the filtered one. Recurses once per level
/// of depth.
///
/// # Example
///
/// ```
/// use forest::{filter_tree, Node};
///
/// let forest = vec![Node::new(1).child(Node::new(2)).child(Node::new(3))];
/// let kept = filter_tree(forest, |n| n.data == 3);
/// assert_eq!(kept[0].data, 1);
/// assert_eq!(kept[0].children, vec![Node::new(3)]);
/// ```
pub fn filter_tree<D, F>(forest: Vec<Node<D>>, mut predicate: F) -> Vec<Node<D>>
where
    F: FnMut(&Node<D>) -> bool,
{
    filter_nodes(forest, &mut predicate)
}

fn filter_nodes<D, F>(forest: Vec<Node<D>>, predicate: &mut F) -> Vec<Node<D>>
where
    F: FnMut(&Node<D>) -> bool,
{
    forest
        .into_iter()
        .filter_map(|mut node| {
            node.children = filter_nodes(std::mem::take(&mut node.children), &mut *predicate);
            let keep = predicate(&node) || !node.children.is_empty();
            keep.then_some(node)
        })
        .collect()
}

/// Same as [`filter_tree`] but mutates the forest in place
///
/// Every surviving node has its children replaced by the filtered ones and
/// the rest are removed from their parent's collection.
pub fn filter_tree_in_place<D, F>(forest: &mut Vec<Node<D>>, mut predicate: F)
where
    F: FnMut(&Node<D>) -> bool,
{
    retain_nodes(forest, &mut predicate);
}

fn retain_nodes<D, F>(forest: &mut Vec<Node<D>>, predicate: &mut F)
where
    F: FnMut(&Node<D>) -> bool,
{
    forest.retain_mut(|node| {
        retain_nodes(&mut node.children, &mut *predicate);
        predicate(&*node) || !node.children.is_empty()
    });
}

/// [`filter_tree`] with an optional predicate
///
/// Without a predicate the forest is returned unchanged.
pub fn filter_tree_opt<D, F>(forest: Vec<Node<D>>, predicate: Option<F>) -> Vec<Node<D>>
where
    F: FnMut(&Node<D>) -> bool,
{
    match predicate {
        Some(predicate) => filter_tree(forest, predicate),
        None => forest,
    }
}
