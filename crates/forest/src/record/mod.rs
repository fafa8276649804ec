//! Dynamic records with an open-ended set of fields
//!
//! Records are the loosely-typed payload for callers whose data has no fixed
//! schema. The structural fields (identifier, parent identifier, children)
//! are located through [`FieldNames`].

mod fields;
mod value;

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use fields::{array_to_tree_value, forest_from_value, forest_into_value, FieldNames};
pub use value::{Key, Value};

/// A record holding field values by name.
///
/// Fields are kept in a `BTreeMap` so iteration and `Debug` output are
/// stable.
///
/// # Example
///
/// ```
/// use forest::Record;
///
/// let record = Record::new().set("id", 1).set("name", "Sales");
/// assert_eq!(record.get_str("name"), Some("Sales"));
/// assert_eq!(record.get_i64("id"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field and returns the record, for chained construction.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Removes a field, returning its value if it was present.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field as a string slice, if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns the field as an integer, if it is an integer.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Returns the field projected onto an identifier key.
    pub fn get_key(&self, field: &str) -> Option<Key> {
        self.get(field).and_then(Value::to_key)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Build a [`Record`] from `field => value` pairs.
///
/// ```
/// use forest::record;
///
/// let r = record! { "id" => 2, "pid" => 1, "name" => "Ops" };
/// assert_eq!(r.len(), 3);
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ($($field:expr => $value:expr),+ $(,)?) => {
        $crate::Record::new()$(.set($field, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let r = record! { "id" => 1, "name" => "Sales", "budget" => 1.5 };
        assert_eq!(r.get_i64("id"), Some(1));
        assert_eq!(r.get_str("name"), Some("Sales"));
        assert_eq!(r.get("budget"), Some(&Value::Float(1.5)));
        assert_eq!(r.get("missing"), None);
        assert!(r.contains("budget"));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut r = Record::new();
        assert_eq!(r.insert("a", 1), None);
        assert_eq!(r.insert("a", 2), Some(Value::Int(1)));
        assert_eq!(r.remove("a"), Some(Value::Int(2)));
        assert!(r.is_empty());
    }

    #[test]
    fn test_get_key() {
        let r = record! { "id" => "a-1", "pid" => Value::Null };
        assert_eq!(r.get_key("id"), Some(Key::from("a-1")));
        assert_eq!(r.get_key("pid"), None);
    }

    #[test]
    fn test_from_iter_orders_fields() {
        let r: Record = vec![("b", 2), ("a", 1)].into_iter().collect();
        let names: Vec<_> = r.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
