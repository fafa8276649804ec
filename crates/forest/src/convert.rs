//! Flat collection → forest conversion
//!
//! Both strategies take the flat records by value and move each one into at
//! most one node; nothing is cloned. Records that cannot be reached from a
//! root (parent chains that loop back on themselves) are dropped and counted
//! in a `debug!` log line.

use std::collections::HashMap;

use log::{debug, trace};

use crate::keys::RecordKeys;
use crate::node::Node;

/// Nest a flat collection using a reference table
///
/// Every record whose parent identifier resolves to another record in the
/// collection is appended to that record's children, in flat order. Every
/// other record becomes a root, whatever its parent identifier holds.
/// Duplicate identifiers resolve to the last record carrying them.
///
/// Runs in O(n) and assembles the forest without recursion.
pub fn array_to_tree_by_ref<D, K>(records: Vec<D>, keys: &K) -> Vec<Node<D>>
where
    K: RecordKeys<D>,
{
    if records.is_empty() {
        return Vec::new();
    }

    let total = records.len();
    let mut table: HashMap<K::Id, usize> = HashMap::with_capacity(total);
    for (index, record) in records.iter().enumerate() {
        if let Some(id) = keys.id(record) {
            table.insert(id, index);
        }
    }

    let mut roots = Vec::new();
    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); total];
    for (index, record) in records.iter().enumerate() {
        match keys
            .parent_id(record)
            .and_then(|pid| table.get(&pid).copied())
        {
            Some(parent) => children_of[parent].push(index),
            None => roots.push(index),
        }
    }
    trace!("reference table: {} records, {} roots", total, roots.len());

    let slots: Vec<Option<D>> = records.into_iter().map(Some).collect();
    assemble(slots, &roots, &children_of)
}

/// Build nodes bottom-up from a precomputed parent → children index
fn assemble<D>(mut slots: Vec<Option<D>>, roots: &[usize], children_of: &[Vec<usize>]) -> Vec<Node<D>> {
    let total = slots.len();

    // Pre-order over indices; every index sits in exactly one list, so each is
    // reached at most once.
    let mut order = Vec::with_capacity(total);
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(index) = stack.pop() {
        order.push(index);
        stack.extend(children_of[index].iter().rev());
    }

    if order.len() < total {
        debug!(
            "{} of {} records unreachable from any root, dropped",
            total - order.len(),
            total
        );
    }

    // Children follow their parent in pre-order, so walking it backwards
    // builds every child before the node that owns it.
    let mut built: Vec<Option<Node<D>>> = (0..total).map(|_| None).collect();
    for &index in order.iter().rev() {
        let children: Vec<Node<D>> = children_of[index]
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        if let Some(data) = slots[index].take() {
            built[index] = Some(Node::with_children(data, children));
        }
    }

    roots.iter().filter_map(|&root| built[root].take()).collect()
}

/// Nest a flat collection by recursive reconstruction
///
/// Selects, in collection order, every record whose parent identifier equals
/// `root`, then repeats the selection for each of them with its own
/// identifier as the new sentinel. Records never selected are dropped.
///
/// Each level rescans the whole collection, so the worst case is O(n²); use
/// [`array_to_tree_by_ref`] for large inputs. Recurses once per level of
/// depth. A record is taken out of the collection when selected, so parent
/// chains that loop back terminate instead of recursing forever.
pub fn array_to_tree_recursive<D, K>(records: Vec<D>, root: &K::Id, keys: &K) -> Vec<Node<D>>
where
    K: RecordKeys<D>,
{
    if records.is_empty() {
        return Vec::new();
    }

    let total = records.len();
    let mut slots: Vec<Option<D>> = records.into_iter().map(Some).collect();
    let forest = build_level(&mut slots, root, keys);

    let unplaced = slots.iter().filter(|slot| slot.is_some()).count();
    if unplaced > 0 {
        debug!(
            "{} of {} records not reachable from root {:?}, dropped",
            unplaced, total, root
        );
    }
    forest
}

fn build_level<D, K>(slots: &mut [Option<D>], parent: &K::Id, keys: &K) -> Vec<Node<D>>
where
    K: RecordKeys<D>,
{
    let mut level = Vec::new();
    for index in 0..slots.len() {
        let selected = slots[index]
            .as_ref()
            .and_then(|record| keys.parent_id(record))
            .is_some_and(|pid| &pid == parent);
        if !selected {
            continue;
        }
        let Some(data) = slots[index].take() else {
            continue;
        };
        let children = match keys.id(&data) {
            Some(id) => build_level(slots, &id, keys),
            None => Vec::new(),
        };
        level.push(Node::with_children(data, children));
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keys;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        pid: u32,
    }

    fn row(id: u32, pid: u32) -> Row {
        Row { id, pid }
    }

    fn row_keys() -> impl RecordKeys<Row, Id = u32> {
        keys(|r: &Row| r.id, |r: &Row| r.pid)
    }

    fn shape(forest: &[Node<Row>]) -> Vec<(u32, Vec<u32>)> {
        crate::traverse::tree_to_array_dfs(forest)
            .into_iter()
            .map(|n| (n.data.id, n.children.iter().map(|c| c.data.id).collect()))
            .collect()
    }

    #[test]
    fn test_by_ref_basic() {
        let forest = array_to_tree_by_ref(vec![row(1, 0), row(2, 1), row(3, 1)], &row_keys());
        assert_eq!(forest.len(), 1);
        assert_eq!(shape(&forest), vec![(1, vec![2, 3]), (2, vec![]), (3, vec![])]);
    }

    #[test]
    fn test_by_ref_child_before_parent() {
        let forest = array_to_tree_by_ref(vec![row(3, 2), row(2, 1), row(1, 0)], &row_keys());
        assert_eq!(shape(&forest), vec![(1, vec![2]), (2, vec![3]), (3, vec![])]);
    }

    #[test]
    fn test_by_ref_missing_parent_is_root() {
        // pid 99 resolves to nothing, so record 5 is a root regardless of sentinel
        let forest = array_to_tree_by_ref(vec![row(1, 0), row(5, 99), row(2, 1)], &row_keys());
        let roots: Vec<_> = forest.iter().map(|n| n.data.id).collect();
        assert_eq!(roots, vec![1, 5]);
    }

    #[test]
    fn test_by_ref_duplicate_id_last_wins() {
        let records = vec![
            Row { id: 1, pid: 0 },
            Row { id: 1, pid: 0 },
            Row { id: 2, pid: 1 },
        ];
        let forest = array_to_tree_by_ref(records, &row_keys());
        assert_eq!(forest.len(), 2);
        assert!(forest[0].is_leaf());
        assert_eq!(forest[1].child_count(), 1);
    }

    #[test]
    fn test_by_ref_cycle_terminates() {
        let forest = array_to_tree_by_ref(vec![row(1, 0), row(2, 3), row(3, 2)], &row_keys());
        let roots: Vec<_> = forest.iter().map(|n| n.data.id).collect();
        assert_eq!(roots, vec![1]);
    }

    #[test]
    fn test_by_ref_empty() {
        assert!(array_to_tree_by_ref(Vec::<Row>::new(), &row_keys()).is_empty());
    }

    #[test]
    fn test_recursive_basic() {
        let records = vec![row(1, 0), row(2, 1), row(3, 1), row(4, 2), row(5, 0)];
        let forest = array_to_tree_recursive(records, &0, &row_keys());
        assert_eq!(
            shape(&forest),
            vec![
                (1, vec![2, 3]),
                (2, vec![4]),
                (4, vec![]),
                (3, vec![]),
                (5, vec![]),
            ]
        );
    }

    #[test]
    fn test_recursive_custom_sentinel() {
        let records = vec![row(1, 7), row(2, 1), row(3, 0)];
        let forest = array_to_tree_recursive(records, &7, &row_keys());
        assert_eq!(shape(&forest), vec![(1, vec![2]), (2, vec![])]);
    }

    #[test]
    fn test_recursive_drops_orphans() {
        let forest = array_to_tree_recursive(vec![row(1, 0), row(2, 42)], &0, &row_keys());
        assert_eq!(forest.len(), 1);
        assert!(forest[0].is_leaf());
    }

    #[test]
    fn test_recursive_self_parent_terminates() {
        // id 0 under sentinel 0 would select itself forever if not taken out
        let forest = array_to_tree_recursive(vec![row(0, 0), row(1, 0)], &0, &row_keys());
        assert_eq!(shape(&forest), vec![(0, vec![1]), (1, vec![])]);
    }

    #[test]
    fn test_strategies_agree_on_acyclic_input() {
        let records = vec![row(1, 0), row(2, 1), row(3, 0), row(4, 3), row(5, 1), row(6, 4)];
        let by_ref = array_to_tree_by_ref(records.clone(), &row_keys());
        let recursive = array_to_tree_recursive(records, &0, &row_keys());
        assert_eq!(by_ref, recursive);
    }
}
