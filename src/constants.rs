//! Global Constants
//!
//! Centralized constants for discovery rules and agent tuning.
//! All magic values should be defined here with documentation.

/// File discovery constants
pub mod discovery {
    /// Source extensions eligible for analysis (case-sensitive)
    pub const ALLOWED_EXTENSIONS: &[&str] = &["py", "js", "ts", "jsx", "tsx", "java"];

    /// Directory names pruned from traversal at any depth
    pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "__pycache__"];

    /// File name prefix that marks test files, excluded regardless of extension
    pub const TEST_FILE_PREFIX: &str = "test";

    /// Manifest file whose containing directory becomes the effective project root
    pub const MANIFEST_MARKER: &str = "package.json";
}

/// Output artifact constants
pub mod output {
    /// File name of the generated README, written inside the resolved root
    pub const README_FILENAME: &str = "README-CLARITY.md";
}

/// Agent provider constants
pub mod agent {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

    /// Default model for the Claude Code CLI provider
    pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

    /// Default generation temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
}
