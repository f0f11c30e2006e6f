//! Node classification against the target tree

use crate::hash::compute_fingerprint;
use crate::types::DriftError;
use std::path::{Path, PathBuf};

/// Rewrite `path` from under `source_root` to the same relative location
/// under `new_root`.
///
/// Component-wise: strip the source-root prefix, then join the remainder
/// onto the new root. A substring replacement would mis-rewrite paths in
/// which the source root string recurs deeper down.
pub fn mirrored_path(
    path: &Path,
    source_root: &Path,
    new_root: &Path,
) -> Result<PathBuf, DriftError> {
    let relative = path
        .strip_prefix(source_root)
        .map_err(|_| DriftError::Traversal {
            path: path.to_path_buf(),
            source: std::io::Error::other("node is not under the source root"),
        })?;

    Ok(new_root.join(relative))
}

/// Does a source directory's mirror need to be created under the target?
///
/// `Path::exists` semantics on purpose: a failed stat reads as absent, and
/// the create-or-abort that follows reports anything genuinely wrong.
pub fn dir_missing(target_path: &Path) -> bool {
    !target_path.exists()
}

/// Does a source file qualify for staging?
///
/// Stage when the target side is missing, when the two content
/// fingerprints differ, or when either side cannot be fingerprinted at
/// all. The last case is a fail-safe: an unreadable file is staged rather
/// than silently skipped.
pub fn file_needs_staging(source_path: &Path, target_path: &Path) -> bool {
    if !target_path.exists() {
        return true;
    }

    match (
        compute_fingerprint(source_path),
        compute_fingerprint(target_path),
    ) {
        (Ok(source_digest), Ok(target_digest)) => source_digest != target_digest,
        // Unreadable on either side: treat as changed.
        (Err(_), _) | (_, Err(_)) => true,
    }
}
