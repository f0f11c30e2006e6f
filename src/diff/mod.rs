//! Comparison logic - decides which nodes qualify for staging

mod compare;

pub use compare::{dir_missing, file_needs_staging, mirrored_path};
