//! Queries that derive a new forest or sequence from an existing one

mod filter;
mod leaves;
mod path;
mod search;

pub use filter::{filter_tree, filter_tree_in_place, filter_tree_opt};
pub use leaves::{into_leaves, tree_leaves};
pub use path::{find_id_path, find_path, node_path, NodePath, PathMode};
pub use search::{fuzzy_search, search_field};
