//! Source tree traversal

mod walker;

pub use walker::walk_tree;
