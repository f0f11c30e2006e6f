//! Sequential source tree walker

use crate::types::{DriftError, TreeEntry};
use std::path::Path;
use walkdir::WalkDir;

/// Walk every node under `root`, the root itself included.
///
/// Depth-first, siblings in file-name order, so two runs over the same
/// tree visit nodes identically. The iterator is lazy - nothing is read
/// ahead of the caller.
///
/// The first error (unreadable directory, vanished node, missing root) is
/// yielded as [`DriftError::Traversal`] carrying the offending path, and
/// the caller is expected to stop there; traversal has no
/// skip-and-continue mode.
///
/// Symbolic links are not followed. A link never reports `is_dir`, so the
/// rest of the pipeline treats it like a file.
pub fn walk_tree(root: &Path) -> impl Iterator<Item = Result<TreeEntry, DriftError>> {
    let root = root.to_path_buf();

    WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(move |result| match result {
            Ok(entry) => {
                let is_dir = entry.file_type().is_dir();
                Ok(TreeEntry::new(entry.into_path(), is_dir))
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                Err(DriftError::Traversal {
                    path,
                    source: err.into(),
                })
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect(root: &Path) -> Vec<TreeEntry> {
        walk_tree(root)
            .collect::<Result<Vec<_>, _>>()
            .expect("walk should succeed")
    }

    #[test]
    fn test_walk_includes_root_first() {
        let temp_dir = TempDir::new().expect("create tempdir");
        fs::write(temp_dir.path().join("file.txt"), b"x").expect("write file");

        let entries = collect(temp_dir.path());
        assert_eq!(entries[0].path, temp_dir.path());
        assert!(entries[0].is_dir);
    }

    #[test]
    fn test_walk_order_is_deterministic_and_name_sorted() {
        let temp_dir = TempDir::new().expect("create tempdir");
        let root = temp_dir.path();
        fs::write(root.join("b.txt"), b"b").expect("write b");
        fs::write(root.join("a.txt"), b"a").expect("write a");
        fs::create_dir(root.join("sub")).expect("create sub");
        fs::write(root.join("sub/c.txt"), b"c").expect("write c");

        let paths: Vec<_> = collect(root).into_iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec![
                root.to_path_buf(),
                root.join("a.txt"),
                root.join("b.txt"),
                root.join("sub"),
                root.join("sub/c.txt"),
            ]
        );
    }

    #[test]
    fn test_walk_flags_directories() {
        let temp_dir = TempDir::new().expect("create tempdir");
        let root = temp_dir.path();
        fs::create_dir(root.join("dir")).expect("create dir");
        fs::write(root.join("file"), b"x").expect("write file");

        for entry in collect(root) {
            let expected = entry.path != root.join("file");
            assert_eq!(entry.is_dir, expected, "wrong kind for {:?}", entry.path);
        }
    }

    #[test]
    fn test_missing_root_yields_traversal_error() {
        let temp_dir = TempDir::new().expect("create tempdir");
        let missing = temp_dir.path().join("gone");

        let first = walk_tree(&missing).next().expect("one result");
        let error = first.expect_err("missing root must error");
        assert!(matches!(error, DriftError::Traversal { .. }));
        assert!(error.to_string().contains("gone"));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_is_reported_as_file() {
        let temp_dir = TempDir::new().expect("create tempdir");
        let root = temp_dir.path();
        fs::create_dir(root.join("real")).expect("create real dir");
        std::os::unix::fs::symlink(root.join("real"), root.join("link"))
            .expect("create symlink");

        let entries = collect(root);
        let link = entries
            .iter()
            .find(|e| e.path == root.join("link"))
            .expect("link entry present");
        assert!(!link.is_dir, "symlinked directory must classify as a file");
    }
}
