//! Discovered File Records
//!
//! A `FileRecord` is one source file that survived discovery filtering.
//! Records are created during discovery, immutable afterwards, and consumed
//! once by the analysis stage.

use std::path::{Path, PathBuf};

/// A single discovered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Full path as produced by the walker
    pub path: PathBuf,
    /// Path relative to the resolved project root
    pub relative: PathBuf,
    /// File extension (always one of the allowed extensions)
    pub extension: String,
}

impl FileRecord {
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();
        Self {
            path,
            relative,
            extension,
        }
    }

    /// Relative path rendered for prompt embedding
    pub fn display_relative(&self) -> String {
        self.relative.to_string_lossy().to_string()
    }
}
