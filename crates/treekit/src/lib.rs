// Tree and array utilities for Treekit
// Re-exports the forest, flatten and run-queue crates under one roof

pub use flatten;
pub use forest;
pub use ::run_queue;

pub use flatten::{flatten_all, flatten_depth, flatten_fold, flatten_recursive, nested, Nested};
pub use forest::record;
pub use ::run_queue::{run_queue, run_queue_with_callback, RunSummary, SequentialRunner};

/// Everything needed for the common flat-to-tree workflows
pub mod prelude {
    pub use flatten::{flatten_all, Nested};
    pub use forest::prelude::*;
    pub use ::run_queue::{run_queue, RunSummary, SequentialRunner};
}
