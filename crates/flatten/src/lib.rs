// Nested-array flattening for treekit
// This crate provides a nested sequence type and interchangeable flattening strategies

mod nesting;
mod strategy;

pub use nesting::Nested;
pub use strategy::{flatten_all, flatten_depth, flatten_fold, flatten_recursive};
