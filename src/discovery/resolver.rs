//! Project Root Resolution
//!
//! A single top-down traversal of the caller path looking for the manifest
//! marker. A directory's own files are examined before any descent, so a
//! shallower marker always wins; subdirectories are visited in
//! directory-listing order with the usual pruning. Without a marker the
//! caller path is used unchanged. Read-only, never fails.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DiscoveryConfig;

/// Resolve the effective project root for a caller-supplied path.
pub fn resolve_root(caller_path: &Path, config: &DiscoveryConfig) -> PathBuf {
    match find_marker_dir(caller_path, config) {
        Some(dir) => {
            debug!(
                "Resolved project root to {} (found {})",
                dir.display(),
                config.manifest_marker
            );
            dir
        }
        None => {
            debug!(
                "No {} found, keeping caller path {}",
                config.manifest_marker,
                caller_path.display()
            );
            caller_path.to_path_buf()
        }
    }
}

fn find_marker_dir(dir: &Path, config: &DiscoveryConfig) -> Option<PathBuf> {
    let mut entries: Vec<_> = fs::read_dir(dir).ok()?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    // This directory's own files first, before any descent
    for entry in &entries {
        if entry.file_type().is_ok_and(|t| t.is_file())
            && entry.file_name().to_string_lossy() == config.manifest_marker
        {
            return Some(dir.to_path_buf());
        }
    }

    for entry in &entries {
        if !entry.file_type().is_ok_and(|t| t.is_dir()) {
            continue;
        }
        if config.is_excluded_dir(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if let Some(found) = find_marker_dir(&entry.path(), config) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_marker_at_root() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("package.json"));
        let root = resolve_root(dir.path(), &DiscoveryConfig::default());
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_marker_in_subdirectory() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("frontend/package.json"));
        touch(&dir.path().join("frontend/src/app.js"));
        let root = resolve_root(dir.path(), &DiscoveryConfig::default());
        assert_eq!(root, dir.path().join("frontend"));
    }

    #[test]
    fn test_no_marker_keeps_caller_path() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("src/app.py"));
        let root = resolve_root(dir.path(), &DiscoveryConfig::default());
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_shallower_marker_wins() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("package.json"));
        // "app" sorts before "package.json" but descent happens after
        // this directory's own files were examined
        touch(&dir.path().join("app/nested/package.json"));
        let root = resolve_root(dir.path(), &DiscoveryConfig::default());
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_sibling_markers_resolve_in_listing_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("beta/package.json"));
        touch(&dir.path().join("alpha/package.json"));
        let root = resolve_root(dir.path(), &DiscoveryConfig::default());
        assert_eq!(root, dir.path().join("alpha"));
    }

    #[test]
    fn test_marker_inside_excluded_dir_ignored() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("node_modules/left-pad/package.json"));
        let root = resolve_root(dir.path(), &DiscoveryConfig::default());
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_unreadable_path_keeps_caller_path() {
        let missing = Path::new("/definitely/not/here");
        let root = resolve_root(missing, &DiscoveryConfig::default());
        assert_eq!(root, missing);
    }
}
