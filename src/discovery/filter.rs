//! Path Relevance Filter
//!
//! Pure predicate deciding whether a file participates in analysis.
//! A file is relevant iff its extension matches an allowed extension
//! exactly, its name does not carry the test-file prefix, and no path
//! segment between the walked root and the file is an excluded directory.

use std::path::Path;

use crate::config::DiscoveryConfig;

/// Relevance predicate over discovered paths
pub struct PathFilter<'a> {
    config: &'a DiscoveryConfig,
}

impl<'a> PathFilter<'a> {
    pub fn new(config: &'a DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Check whether a file path is relevant for analysis.
    ///
    /// `root` is the walked root; segments above it are not inspected.
    pub fn is_relevant(&self, path: &Path, root: &Path) -> bool {
        self.has_allowed_extension(path)
            && !self.is_test_file(path)
            && !self.under_excluded_dir(path, root)
    }

    /// Case-sensitive extension match against the allowed set
    pub fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.allowed_extensions.iter().any(|a| a == ext))
    }

    /// File name starts with the reserved test prefix
    pub fn is_test_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with(&self.config.test_file_prefix))
    }

    fn under_excluded_dir(&self, path: &Path, root: &Path) -> bool {
        let within = path.strip_prefix(root).unwrap_or(path);
        let Some(parent) = within.parent() else {
            return false;
        };
        parent.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|name| self.config.is_excluded_dir(name))
        })
    }
}
