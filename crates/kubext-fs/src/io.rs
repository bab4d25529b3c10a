//! Plain file reads with path-aware errors

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    tracing::debug!(?path, "Reading file");
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_text_reports_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = read_text(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.toml"), "got: {err}");
    }

    #[test]
    fn read_text_returns_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.txt");
        std::fs::write(&path, "hello").unwrap();

        assert_eq!(read_text(&path).unwrap(), "hello");
    }
}
