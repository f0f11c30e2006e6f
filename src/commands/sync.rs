//! Main sync command - the walk/classify/act loop

use crate::diff::{dir_missing, file_needs_staging, mirrored_path};
use crate::executor::{create_dir_permissive, stage_file, SyncStats};
use crate::scanner::walk_tree;
use crate::types::DriftError;
use crate::Config;
use indicatif::HumanBytes;
use std::path::{Path, PathBuf};

/// Run the sync operation
///
/// One linear pass, no retries, no backtracking: resolve the three roots,
/// derive the staging root, then walk the source tree and, per node,
/// either create its directory under the target root, stage its bytes
/// under the staging root, or leave it alone. The first fatal error ends
/// the run; only fingerprint failures are absorbed (the file is then
/// treated as changed).
pub fn run(config: &Config) -> Result<SyncStats, DriftError> {
    let source_root = absolutize(&config.source)?;
    let target_root = absolutize(&config.target)?;
    let diff_root = absolutize(&config.diff_dir)?;
    let staging_root = staging_root(&diff_root, &target_root)?;

    let mut stats = SyncStats::default();

    for entry in walk_tree(&source_root) {
        let entry = entry?;
        let target_path = mirrored_path(&entry.path, &source_root, &target_root)?;

        if entry.is_dir {
            if dir_missing(&target_path) {
                create_dir_permissive(&target_path)?;
                stats.dirs_created += 1;
            }
        } else if file_needs_staging(&entry.path, &target_path) {
            let bytes = stage_file(
                &entry.path,
                &source_root,
                &staging_root,
                &diff_root,
                config.verbose,
            )?;
            stats.files_staged += 1;
            stats.bytes_copied += bytes;
        } else {
            stats.files_skipped += 1;
        }
    }

    Ok(stats)
}

/// One-line human summary for the CLI.
pub fn format_summary(stats: &SyncStats) -> String {
    format!(
        "Staged: {} file(s) ({})  New dirs: {}  Unchanged: {}",
        stats.files_staged,
        HumanBytes(stats.bytes_copied),
        stats.dirs_created,
        stats.files_skipped
    )
}

/// Make a path absolute against the current working directory without
/// touching the filesystem - the diff root may not exist yet.
fn absolutize(path: &Path) -> Result<PathBuf, DriftError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|e| DriftError::PathResolution {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(cwd.join(path))
}

/// The staging root is the diff root extended by the target root's base
/// name, so staged files mirror the source layout beneath a directory
/// named like the target. An existing staging root is reused as-is.
fn staging_root(diff_root: &Path, target_root: &Path) -> Result<PathBuf, DriftError> {
    let base = target_root.file_name().ok_or_else(|| {
        DriftError::Config(format!(
            "target directory '{}' has no usable base name",
            target_root.display()
        ))
    })?;

    Ok(diff_root.join(base))
}
