//! Substring search that keeps matching branches

use crate::node::Node;
use crate::record::Record;

/// Search node labels for `query`, keeping the branches that lead to matches
///
/// `label` extracts the text to test from a payload; payloads without a label
/// never match. The test is a case-sensitive substring check, so an empty
/// query matches every labelled node.
///
/// Matching nodes are copied with their filtered children, possibly none.
/// Non-matching nodes are copied only when some descendant matched, as
/// scaffolding. The input forest is left untouched. Recurses once per level
/// of depth.
pub fn fuzzy_search<D, L>(forest: &[Node<D>], query: &str, label: L) -> Vec<Node<D>>
where
    D: Clone,
    L: Fn(&D) -> Option<&str>,
{
    search_nodes(forest, query, &label)
}

fn search_nodes<D, L>(forest: &[Node<D>], query: &str, label: &L) -> Vec<Node<D>>
where
    D: Clone,
    L: Fn(&D) -> Option<&str>,
{
    forest
        .iter()
        .filter_map(|node| {
            let matched = label(&node.data).is_some_and(|text| text.contains(query));
            let children = search_nodes(&node.children, query, label);
            (matched || !children.is_empty())
                .then(|| Node::with_children(node.data.clone(), children))
        })
        .collect()
}

/// [`fuzzy_search`] over a string field of dynamic records
///
/// A missing or non-string field never matches.
///
/// # Example
///
/// ```
/// use forest::{record, search_field, FieldNames, Node};
///
/// let forest = FieldNames::default().array_to_tree(vec![
///     record! { "id" => 1, "pid" => 0, "name" => "Finance" },
///     record! { "id" => 2, "pid" => 1, "name" => "Payroll" },
///     record! { "id" => 3, "pid" => 1, "name" => "Audit" },
/// ]);
/// let found = search_field(&forest, "name", "roll");
/// assert_eq!(found[0].children.len(), 1);
/// assert_eq!(found[0].children[0].data.get_str("name"), Some("Payroll"));
/// ```
pub fn search_field(forest: &[Node<Record>], field: &str, query: &str) -> Vec<Node<Record>> {
    fuzzy_search(forest, query, |record| record.get_str(field))
}
