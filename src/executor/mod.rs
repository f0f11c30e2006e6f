//! Stager - materializes qualifying nodes
//!
//! Two side effects exist in the whole program: directories created under
//! the target root, and file bytes copied under the staging root. Both
//! live here.

pub mod copy;

use crate::types::DriftError;
use std::fs;
use std::path::Path;

pub use copy::copy_file;

/// Aggregate counters for one sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Files staged into the diff tree
    pub files_staged: usize,
    /// Files left alone because contents matched
    pub files_skipped: usize,
    /// Directories newly created under the target root
    pub dirs_created: usize,
    /// Bytes written into the staging tree
    pub bytes_copied: u64,
}

/// Create `path` and any missing ancestors with permissive permissions,
/// the equivalent of `mkdir -p -m 777`. The process umask still applies.
pub fn create_dir_permissive(path: &Path) -> Result<(), DriftError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder
        .create(path)
        .map_err(|e| DriftError::DirectoryCreate {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Stage one qualifying file.
///
/// The destination is the file's source-relative path rejoined onto the
/// staging root; the parent chain is created on demand, then the bytes are
/// streamed across. Returns the copied byte count.
///
/// With `verbose` set, one line per successful copy reports both sides
/// relative to their roots with a `./` shorthand prefix. Purely
/// informational.
pub fn stage_file(
    source_path: &Path,
    source_root: &Path,
    staging_root: &Path,
    diff_root: &Path,
    verbose: bool,
) -> Result<u64, DriftError> {
    let relative = source_path
        .strip_prefix(source_root)
        .map_err(|_| DriftError::Copy {
            path: source_path.to_path_buf(),
            source: std::io::Error::other("file is not under the source root"),
        })?;
    let dest = staging_root.join(relative);

    let bytes = copy_file(source_path, &dest)?;

    if verbose {
        let dest_relative = dest.strip_prefix(diff_root).unwrap_or(&dest);
        println!(
            "./{} was copied to ./{}",
            relative.display(),
            dest_relative.display()
        );
    }

    Ok(bytes)
}
