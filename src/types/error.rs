//! Error types for drift

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for drift operations
///
/// Every variant except `Fingerprint` aborts the run on first occurrence;
/// the top-level caller receives exactly one of these, wrapping the
/// offending path and the underlying cause.
#[derive(Debug, Error)]
pub enum DriftError {
    /// Invalid configuration (empty path parameter, unusable target base name)
    #[error("configuration error: {0}")]
    Config(String),

    /// A root path could not be made absolute
    #[error("failed to resolve absolute path for '{}': {}", .path.display(), .source)]
    PathResolution {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The walker could not stat or list a node under the source root
    #[error("failed to traverse '{}': {}", .path.display(), .source)]
    Traversal {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Hashing a file's content failed
    #[error("failed to fingerprint '{}': {}", .path.display(), .source)]
    Fingerprint {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Creating a directory under the target or staging root failed
    #[error("failed to create directory '{}': {}", .path.display(), .source)]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Opening the source, creating the destination, or transferring bytes failed
    #[error("failed to copy '{}': {}", .path.display(), .source)]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DriftError {
    /// Check if this error is locally recoverable.
    ///
    /// Only fingerprint failures qualify: the comparator downgrades them to
    /// "treat the file as changed" so the file is staged instead of the run
    /// aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DriftError::Fingerprint { .. })
    }

    /// Check if this error is a configuration problem
    pub fn is_config_error(&self) -> bool {
        matches!(self, DriftError::Config(_))
    }

    /// The path this error is anchored to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            DriftError::Config(_) => None,
            DriftError::PathResolution { path, .. }
            | DriftError::Traversal { path, .. }
            | DriftError::Fingerprint { path, .. }
            | DriftError::DirectoryCreate { path, .. }
            | DriftError::Copy { path, .. } => Some(path),
        }
    }
}
