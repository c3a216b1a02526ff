//! File Discovery Module
//!
//! Project-root resolution and source-file discovery over a filesystem tree:
//! - Relevance filtering (extension, test prefix, excluded directories)
//! - Manifest-based root resolution
//! - Deterministic top-down walking with directory pruning

pub mod filter;
pub mod resolver;
pub mod scanner;

pub use filter::PathFilter;
pub use resolver::resolve_root;
pub use scanner::discover;

use std::path::Path;

use ignore::{Walk, WalkBuilder};

use crate::config::DiscoveryConfig;

/// Build the top-down walker used by file discovery.
///
/// Excluded directory names are pruned from descent entirely, and entries
/// are yielded in sorted directory-listing order (parent before children)
/// so traversal order is deterministic across runs.
pub(crate) fn build_walker(root: &Path, config: &DiscoveryConfig) -> Walk {
    let excluded = config.excluded_dirs.clone();
    WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            // The walked root is never pruned, whatever its name
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !excluded.iter().any(|d| d.as_str() == name)
        })
        .build()
}
