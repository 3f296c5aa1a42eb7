// Change detection and output persistence
//
// The run only touches the filesystem when the serialized document actually
// differs from what is on disk, keyed by SHA-256 content hash. Writes go
// through a temp file in the target directory followed by a rename, so a
// truncated output file is never observable.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;

/// Hex SHA-256 of a byte string.
fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Decide whether `candidate` needs to be written to `path`.
///
/// An absent file hashes as the empty string, so a first run always writes.
/// Collisions are cryptographically negligible and not handled.
pub fn should_write(path: &Path, candidate: &str) -> Result<bool> {
    let existing = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("reading existing output {}", path.display()))
        }
    };

    Ok(content_hash(&existing) != content_hash(candidate.as_bytes()))
}

/// Write `contents` to `path` atomically (temp file + rename).
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());

    if let Some(dir) = parent {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    // The temp file must live in the target directory - rename is only
    // atomic within one filesystem
    let mut tmp = match parent {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new_in("."),
    }
    .context("creating temporary output file")?;

    tmp.write_all(contents.as_bytes())
        .context("writing temporary output file")?;

    tmp.persist(path)
        .with_context(|| format!("renaming into place at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_write_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        assert!(should_write(&path, "{}").unwrap());
    }

    #[test]
    fn test_should_not_write_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{\"name\": \"x\"}\n").unwrap();

        assert!(!should_write(&path, "{\"name\": \"x\"}\n").unwrap());
    }

    #[test]
    fn test_should_write_differing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{\"name\": \"x\"}\n").unwrap();

        // Even a single-byte difference flips the decision
        assert!(should_write(&path, "{\"name\": \"y\"}\n").unwrap());
    }

    #[test]
    fn test_write_atomic_creates_parent_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes").join("theme.json");

        write_atomic(&path, "{\"a\": 1}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"a\": 1}\n");
    }

    #[test]
    fn test_write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_round_trip_write_then_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        let contents = "{\"name\": \"Catppuccin Blur\"}\n";

        assert!(should_write(&path, contents).unwrap());
        write_atomic(&path, contents).unwrap();
        assert!(!should_write(&path, contents).unwrap());
    }
}
