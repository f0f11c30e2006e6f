//! CLI-facing commands

pub mod sync;
