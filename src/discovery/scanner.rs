//! Source File Discovery
//!
//! Walks the resolved root top-down with directory pruning, applies the
//! relevance filter to every file, and materializes the ordered result.
//! An empty result is a run-fatal condition, surfaced here so the caller
//! never proceeds with an empty analysis set.

use std::path::Path;

use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::discovery::{PathFilter, build_walker};
use crate::types::{ClarityError, FileRecord, Result};

/// Discover all relevant source files under `root`, in traversal order.
pub fn discover(root: &Path, config: &DiscoveryConfig) -> Result<Vec<FileRecord>> {
    let filter = PathFilter::new(config);
    let mut records = Vec::new();

    for entry in build_walker(root, config).filter_map(|e| e.ok()) {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if filter.is_relevant(path, root) {
            records.push(FileRecord::new(path.to_path_buf(), root));
        }
    }

    if records.is_empty() {
        return Err(ClarityError::NoRelevantFiles(root.to_path_buf()));
    }

    debug!("Discovered {} relevant files", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative_paths(records: &[FileRecord]) -> Vec<PathBuf> {
        records.iter().map(|r| r.relative.clone()).collect()
    }

    #[test]
    fn test_discovers_relevant_files_in_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("src/app.py"));
        touch(&dir.path().join("src/util.ts"));
        touch(&dir.path().join("index.js"));
        touch(&dir.path().join("README.md"));

        let records = discover(dir.path(), &DiscoveryConfig::default()).unwrap();
        assert_eq!(
            relative_paths(&records),
            vec![
                PathBuf::from("index.js"),
                PathBuf::from("src/app.py"),
                PathBuf::from("src/util.ts"),
            ]
        );
    }

    #[test]
    fn test_excluded_dirs_never_traversed() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("app.py"));
        touch(&dir.path().join("node_modules/lib/index.js"));
        touch(&dir.path().join("dist/bundle.js"));
        touch(&dir.path().join("src/__pycache__/app.py"));

        let records = discover(dir.path(), &DiscoveryConfig::default()).unwrap();
        assert_eq!(relative_paths(&records), vec![PathBuf::from("app.py")]);
    }

    #[test]
    fn test_test_prefixed_files_excluded() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("app.py"));
        touch(&dir.path().join("test_app.py"));
        touch(&dir.path().join("tests.java"));

        let records = discover(dir.path(), &DiscoveryConfig::default()).unwrap();
        assert_eq!(relative_paths(&records), vec![PathBuf::from("app.py")]);
    }

    #[test]
    fn test_empty_tree_fails() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("README.md"));

        let err = discover(dir.path(), &DiscoveryConfig::default()).unwrap_err();
        assert!(matches!(err, ClarityError::NoRelevantFiles(_)));
    }

    #[test]
    fn test_two_runs_same_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b.py"));
        touch(&dir.path().join("a.py"));
        touch(&dir.path().join("src/c.js"));

        let cfg = DiscoveryConfig::default();
        let first = discover(dir.path(), &cfg).unwrap();
        let second = discover(dir.path(), &cfg).unwrap();
        assert_eq!(first, second);
    }
}
