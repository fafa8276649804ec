//! Configurable structural field names for dynamic records

use crate::convert::{array_to_tree_by_ref, array_to_tree_recursive};
use crate::keys::RecordKeys;
use crate::node::Node;

use super::{Key, Record, Value};

/// Names of the identifier, parent-identifier and children fields
///
/// Defaults to `id`, `pid` and `children`. Any caller may rename these to
/// match the schema of their records.
///
/// # Example
///
/// ```
/// use forest::{record, FieldNames};
///
/// let fields = FieldNames::default().with_parent_id("parent");
/// let forest = fields.array_to_tree(vec![
///     record! { "id" => 1, "parent" => 0 },
///     record! { "id" => 2, "parent" => 1 },
/// ]);
/// assert_eq!(forest.len(), 1);
/// assert_eq!(forest[0].child_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Identifier field name
    pub id: String,
    /// Parent-identifier field name
    pub parent_id: String,
    /// Children field name
    pub children: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            parent_id: "pid".to_string(),
            children: "children".to_string(),
        }
    }
}

impl FieldNames {
    /// Field names with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier field name
    pub fn with_id(mut self, name: impl Into<String>) -> Self {
        self.id = name.into();
        self
    }

    /// Set the parent-identifier field name
    pub fn with_parent_id(mut self, name: impl Into<String>) -> Self {
        self.parent_id = name.into();
        self
    }

    /// Set the children field name
    pub fn with_children(mut self, name: impl Into<String>) -> Self {
        self.children = name.into();
        self
    }

    /// Nest flat records using the reference-table strategy
    pub fn array_to_tree(&self, records: Vec<Record>) -> Vec<Node<Record>> {
        array_to_tree_by_ref(records, self)
    }

    /// Nest flat records using the recursive strategy, starting from the
    /// records whose parent identifier equals `root`
    pub fn array_to_tree_recursive(&self, records: Vec<Record>, root: &Key) -> Vec<Node<Record>> {
        array_to_tree_recursive(records, root, self)
    }
}

impl RecordKeys<Record> for FieldNames {
    type Id = Key;

    fn id(&self, record: &Record) -> Option<Key> {
        record.get_key(&self.id)
    }

    fn parent_id(&self, record: &Record) -> Option<Key> {
        record.get_key(&self.parent_id)
    }
}

impl Node<Record> {
    /// Split a nested record into a node
    ///
    /// An array under the children field becomes the node's children; array
    /// entries that are not records (nulls included) are skipped. Any other
    /// value under the children field, falsy or not, is left on the record
    /// and the node is a leaf.
    ///
    /// Recurses once per level of nesting.
    pub fn from_record(mut record: Record, fields: &FieldNames) -> Self {
        let children = match record.remove(&fields.children) {
            Some(Value::Array(items)) => records_of(items)
                .map(|child| Node::from_record(child, fields))
                .collect(),
            Some(other) => {
                record.insert(fields.children.clone(), other);
                Vec::new()
            }
            None => Vec::new(),
        };
        Node::with_children(record, children)
    }

    /// Embed the children back into the record under the children field
    ///
    /// The field is only written when the node has children, so a leaf comes
    /// back without it. Recurses once per level of depth.
    pub fn into_record(self, fields: &FieldNames) -> Record {
        let (mut record, children) = self.into_parts();
        if !children.is_empty() {
            let nested: Vec<Value> = children
                .into_iter()
                .map(|child| Value::Record(child.into_record(fields)))
                .collect();
            record.insert(fields.children.clone(), Value::Array(nested));
        }
        record
    }
}

/// Parse a nested value into a forest
///
/// Anything other than an array yields an empty forest.
pub fn forest_from_value(value: Value, fields: &FieldNames) -> Vec<Node<Record>> {
    match value {
        Value::Array(items) => records_of(items)
            .map(|record| Node::from_record(record, fields))
            .collect(),
        _ => Vec::new(),
    }
}

/// Render a forest back into an array of nested records
pub fn forest_into_value(forest: Vec<Node<Record>>, fields: &FieldNames) -> Value {
    Value::Array(
        forest
            .into_iter()
            .map(|node| Value::Record(node.into_record(fields)))
            .collect(),
    )
}

/// Nest a flat array value with the reference-table strategy
///
/// Anything other than an array yields an empty forest; entries that are not
/// records are skipped.
pub fn array_to_tree_value(value: Value, fields: &FieldNames) -> Vec<Node<Record>> {
    match value {
        Value::Array(items) => fields.array_to_tree(records_of(items).collect()),
        _ => Vec::new(),
    }
}

fn records_of(items: Vec<Value>) -> impl Iterator<Item = Record> {
    items.into_iter().filter_map(|item| match item {
        Value::Record(record) => Some(record),
        _ => None,
    })
}
