//! Accessors for the structural fields of a flat record

use std::fmt::Debug;
use std::hash::Hash;

/// Locates the identifier and parent identifier of a flat record
///
/// Conversion from a flat collection to a forest only needs these two
/// fields, so any payload type can be nested once it has a `RecordKeys`
/// implementation. [`FieldNames`](crate::FieldNames) covers dynamic
/// [`Record`](crate::Record)s; [`keys`] builds one from a pair of closures for
/// typed payloads.
pub trait RecordKeys<D> {
    /// Identifier type shared by the id and parent-id fields
    type Id: Eq + Hash + Clone + Debug;

    /// The record's own identifier
    ///
    /// Returns `None` when the record carries no usable identifier.
    fn id(&self, record: &D) -> Option<Self::Id>;

    /// The identifier of the record's parent
    ///
    /// Returns `None` when the field is missing; such a record is a root in
    /// reference-table conversion and is never selected by the recursive
    /// strategy.
    fn parent_id(&self, record: &D) -> Option<Self::Id>;

    /// Returns true if `record` carries the identifier `target`
    fn has_id(&self, record: &D, target: &Self::Id) -> bool {
        self.id(record).as_ref() == Some(target)
    }
}

/// [`RecordKeys`] backed by two closures
///
/// Created with [`keys`].
#[derive(Clone, Copy)]
pub struct KeyFn<I, P> {
    id: I,
    parent_id: P,
}

/// Build [`RecordKeys`] from an id accessor and a parent-id accessor
///
/// # Example
///
/// ```
/// use forest::{array_to_tree_by_ref, keys};
///
/// struct Dept { id: u32, parent: u32, name: &'static str }
///
/// let depts = vec![
///     Dept { id: 1, parent: 0, name: "HQ" },
///     Dept { id: 2, parent: 1, name: "Ops" },
/// ];
/// let forest = array_to_tree_by_ref(depts, &keys(|d: &Dept| d.id, |d: &Dept| d.parent));
/// assert_eq!(forest[0].children[0].data.name, "Ops");
/// ```
pub fn keys<I, P>(id: I, parent_id: P) -> KeyFn<I, P> {
    KeyFn { id, parent_id }
}

impl<D, K, I, P> RecordKeys<D> for KeyFn<I, P>
where
    I: Fn(&D) -> K,
    P: Fn(&D) -> K,
    K: Eq + Hash + Clone + Debug,
{
    type Id = K;

    fn id(&self, record: &D) -> Option<K> {
        Some((self.id)(record))
    }

    fn parent_id(&self, record: &D) -> Option<K> {
        Some((self.parent_id)(record))
    }
}

impl<I, P> std::fmt::Debug for KeyFn<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyFn").finish_non_exhaustive()
    }
}
