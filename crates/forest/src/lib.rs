//! Forest Library
//!
//! Pure transformations between flat record collections and nested
//! parent/child structures.
//!
//! # Core Concepts
//!
//! - **Node**: a payload plus an owned, ordered list of child nodes
//! - **Forest**: an ordered list of root nodes (`Vec<Node<D>>`)
//! - **RecordKeys**: how to read the identifier and parent identifier of a
//!   flat record; implemented by [`FieldNames`] for dynamic [`Record`]s and by
//!   [`keys`] for typed payloads
//!
//! # Layers
//!
//! - Conversion: [`array_to_tree_by_ref`], [`array_to_tree_recursive`]
//! - Traversal: [`tree_to_array_dfs`], [`tree_to_array_bfs`],
//!   [`tree_to_array_recursive`], [`walk`]
//! - Queries: [`filter_tree`], [`node_path`], [`fuzzy_search`], [`tree_leaves`]
//!
//! Every function either borrows its input or consumes it and returns a new
//! structure; nothing is mutated behind the caller's back except through
//! [`filter_tree_in_place`].
//!
//! # Example
//!
//! ```
//! use forest::prelude::*;
//! use forest::record;
//!
//! let fields = FieldNames::default();
//! let forest = fields.array_to_tree(vec![
//!     record! { "id" => 1, "pid" => 0, "name" => "HQ" },
//!     record! { "id" => 2, "pid" => 1, "name" => "Sales" },
//!     record! { "id" => 3, "pid" => 1, "name" => "Ops" },
//! ]);
//!
//! for (depth, node) in walk(&forest, TraversalOrder::PreOrder).with_depth() {
//!     let name = node.data.get_str("name").unwrap_or("?");
//!     println!("{:indent$}{}", "", name, indent = depth * 2);
//! }
//!
//! let path = node_path(&forest, &Key::from(3), &fields, PathMode::Ids);
//! assert_eq!(path.into_ids(), Some(vec![Some(Key::from(1)), Some(Key::from(3))]));
//! ```
//!
//! # Recursion
//!
//! Traversal, path lookup, leaf enumeration and reference-table conversion
//! keep explicit stacks or queues. Recursive conversion, filtering, fuzzy
//! search and recursive traversal use one stack frame per level of depth and
//! can exhaust the stack on pathologically deep input.

mod convert;
mod keys;
mod node;
pub mod query;
pub mod record;
pub mod traverse;

pub use convert::{array_to_tree_by_ref, array_to_tree_recursive};
pub use keys::{keys, KeyFn, RecordKeys};
pub use node::{depth, node_count, Node};
pub use query::{
    filter_tree, filter_tree_in_place, filter_tree_opt, find_id_path, find_path, fuzzy_search,
    into_leaves, node_path, search_field, tree_leaves, NodePath, PathMode,
};
pub use record::{
    array_to_tree_value, forest_from_value, forest_into_value, FieldNames, Key, Record, Value,
};
pub use traverse::{
    into_array_bfs, into_array_dfs, tree_to_array, tree_to_array_bfs, tree_to_array_dfs,
    tree_to_array_recursive, walk, TraversalOrder, Walker, WithDepth,
};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::{
        array_to_tree_by_ref, array_to_tree_recursive, filter_tree, fuzzy_search, keys,
        node_path, search_field, tree_leaves, tree_to_array_bfs, tree_to_array_dfs,
        tree_to_array_recursive, walk, FieldNames, Key, Node, NodePath, PathMode, Record,
        RecordKeys, TraversalOrder, Value,
    };
}
