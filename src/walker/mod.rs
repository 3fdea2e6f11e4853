//! Directory walker
//!
//! Recursive delete and size aggregation over directory subtrees.

mod operations;
mod results;

pub use operations::{list_children, recursive_delete, recursive_size};
pub use results::{DeletionReport, SizeTotal};
