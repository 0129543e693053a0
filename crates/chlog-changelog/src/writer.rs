//! Appending rendered entries to the changelog file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chlog_core::error::ChangelogError;
use tracing::{debug, info};

/// Append `content` to the file at `path`, creating it if needed.
///
/// Existing content is never read or rewritten. Each call appends once, so
/// calling twice with the same content leaves two copies.
pub fn append_to_file(path: &Path, content: &str) -> Result<(), ChangelogError> {
    debug!(path = %path.display(), bytes = content.len(), "appending to changelog");

    let write_failed = |source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_failed)?;
    file.write_all(content.as_bytes()).map_err(write_failed)?;
    file.flush().map_err(write_failed)?;

    info!(path = %path.display(), "changelog entry appended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        append_to_file(&path, "## [1.0.0]\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "## [1.0.0]\n");
    }

    #[test]
    fn test_append_twice_concatenates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        let content = "## [1.0.0] - 2024-01-01\n\n### Added\n\n- thing\n\n";

        append_to_file(&path, content).unwrap();
        append_to_file(&path, content).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{content}{content}"));
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "# Changelog\n\n").unwrap();

        append_to_file(&path, "## [0.2.0]\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Changelog\n\n## [0.2.0]\n"
        );
    }

    #[test]
    fn test_append_to_directory_fails() {
        let temp = TempDir::new().unwrap();

        let err = append_to_file(temp.path(), "content").unwrap_err();

        assert!(matches!(err, ChangelogError::WriteFailed { .. }));
    }

    #[test]
    fn test_append_to_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("CHANGELOG.md");

        assert!(append_to_file(&path, "content").is_err());
    }
}
