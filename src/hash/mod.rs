//! Content fingerprinting

use crate::types::DriftError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Full-content BLAKE3 digest of a file.
///
/// Fixed 32 bytes; render with [`blake3::Hash::to_hex`] when a printable
/// form is needed.
pub type Fingerprint = blake3::Hash;

/// Compute the content fingerprint of a file
///
/// The file is streamed in 64KB chunks for memory efficiency. Size and
/// modification time are never consulted - equality means equal bytes.
///
/// Any failure (open or read) is reported as [`DriftError::Fingerprint`].
/// Callers decide whether that is fatal; the comparator deliberately reads
/// it as "the file differs" so an unreadable file is staged rather than
/// silently skipped.
pub fn compute_fingerprint(file_path: &Path) -> Result<Fingerprint, DriftError> {
    let mut file = File::open(file_path).map_err(|e| DriftError::Fingerprint {
        path: file_path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = blake3::Hasher::new();
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| DriftError::Fingerprint {
            path: file_path.to_path_buf(),
            source: e,
        })?;

        if bytes_read == 0 {
            break; // EOF
        }

        hasher.update(&buffer[0..bytes_read]);
    }

    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fingerprint_empty_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"").unwrap();
        temp_file.flush().unwrap();

        let fingerprint = compute_fingerprint(temp_file.path()).unwrap();
        // BLAKE3 of the empty input
        assert_eq!(
            fingerprint.to_hex().as_str(),
            "af1349b9f5f9a1a6a0404dee36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let content = b"hello\ntest1\n";

        let mut file1 = NamedTempFile::new().unwrap();
        file1.write_all(content).unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        file2.write_all(content).unwrap();
        file2.flush().unwrap();

        let fingerprint1 = compute_fingerprint(file1.path()).unwrap();
        let fingerprint2 = compute_fingerprint(file2.path()).unwrap();

        assert_eq!(fingerprint1, fingerprint2);
    }

    #[test]
    fn test_fingerprint_different_content() {
        let mut file1 = NamedTempFile::new().unwrap();
        file1.write_all(b"hello\ntest1\n").unwrap();
        file1.flush().unwrap();

        let mut file2 = NamedTempFile::new().unwrap();
        file2.write_all(b"hello\ntest2\n").unwrap();
        file2.flush().unwrap();

        let fingerprint1 = compute_fingerprint(file1.path()).unwrap();
        let fingerprint2 = compute_fingerprint(file2.path()).unwrap();

        assert_ne!(fingerprint1, fingerprint2);
    }

    #[test]
    fn test_fingerprint_hex_rendering() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"content").unwrap();
        temp_file.flush().unwrap();

        let hex = compute_fingerprint(temp_file.path()).unwrap().to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_nonexistent_file_is_recoverable() {
        let result = compute_fingerprint(Path::new("/nonexistent/file.txt"));

        let error = result.unwrap_err();
        assert!(matches!(error, DriftError::Fingerprint { .. }));
        assert!(error.is_recoverable());
    }
}
