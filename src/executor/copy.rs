//! Buffered file copy into the staging tree

use crate::executor::create_dir_permissive;
use crate::types::DriftError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Copy the full byte stream of `src` into `dest`.
///
/// The destination is created (truncated if something is already there)
/// and its parent directory chain is created first when missing. Both
/// handles are scope-bound, so they close on every exit path, error paths
/// included. There is no partial-success mode: the first failure is
/// returned as [`DriftError::Copy`] and ends the run.
///
/// Returns the number of bytes copied.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, DriftError> {
    if let Some(parent) = dest.parent() {
        if !parent.exists() {
            create_dir_permissive(parent)?;
        }
    }

    let mut src_file = File::open(src).map_err(|e| DriftError::Copy {
        path: src.to_path_buf(),
        source: e,
    })?;
    let mut dest_file = File::create(dest).map_err(|e| DriftError::Copy {
        path: dest.to_path_buf(),
        source: e,
    })?;

    let mut buffer = vec![0u8; 128 * 1024];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = src_file.read(&mut buffer).map_err(|e| DriftError::Copy {
            path: src.to_path_buf(),
            source: e,
        })?;

        if bytes_read == 0 {
            break; // EOF
        }

        dest_file
            .write_all(&buffer[0..bytes_read])
            .map_err(|e| DriftError::Copy {
                path: dest.to_path_buf(),
                source: e,
            })?;
        total_bytes += bytes_read as u64;
    }

    Ok(total_bytes)
}
