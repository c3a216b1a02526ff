//! Configuration Types
//!
//! Discovery rules and agent provider settings with sensible defaults.
//! Discovery defaults mirror the fixed filtering contract; agent settings
//! can be overridden from the CLI.

use serde::{Deserialize, Serialize};

use crate::constants::{agent, discovery};
use crate::types::{ClarityError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File discovery settings
    pub discovery: DiscoveryConfig,

    /// Agent provider settings
    pub agent: AgentConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ClarityError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.discovery.allowed_extensions.is_empty() {
            return Err(ClarityError::Config(
                "discovery.allowed_extensions must not be empty".to_string(),
            ));
        }

        if self.discovery.output_filename.trim().is_empty() {
            return Err(ClarityError::Config(
                "discovery.output_filename must not be empty".to_string(),
            ));
        }

        if self.agent.timeout_secs == 0 {
            return Err(ClarityError::Config(
                "agent.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.agent.temperature) {
            return Err(ClarityError::Config(format!(
                "agent.temperature must be between 0.0 and 2.0, got {}",
                self.agent.temperature
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Discovery Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Source extensions eligible for analysis (case-sensitive match)
    pub allowed_extensions: Vec<String>,

    /// Directory names pruned from traversal at any depth
    pub excluded_dirs: Vec<String>,

    /// File name prefix that excludes test files from discovery
    pub test_file_prefix: String,

    /// Manifest file that redefines the effective project root
    pub manifest_marker: String,

    /// File name of the generated README
    pub output_filename: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: discovery::ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            excluded_dirs: discovery::EXCLUDED_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            test_file_prefix: discovery::TEST_FILE_PREFIX.to_string(),
            manifest_marker: discovery::MANIFEST_MARKER.to_string(),
            output_filename: crate::constants::output::README_FILENAME.to_string(),
        }
    }
}

impl DiscoveryConfig {
    /// Check whether a directory name is excluded from traversal
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }
}

// =============================================================================
// Agent Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Provider type: "claude-code"
    pub provider: String,

    /// Model name (provider-specific)
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Temperature for generation (0.0 = deterministic)
    pub temperature: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            provider: "claude-code".to_string(),
            model: agent::DEFAULT_MODEL.to_string(),
            timeout_secs: agent::DEFAULT_TIMEOUT_SECS,
            temperature: agent::DEFAULT_TEMPERATURE,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_discovery_rules() {
        let cfg = DiscoveryConfig::default();
        assert!(cfg.allowed_extensions.iter().any(|e| e == "py"));
        assert!(cfg.is_excluded_dir("node_modules"));
        assert!(cfg.is_excluded_dir(".git"));
        assert!(!cfg.is_excluded_dir("src"));
        assert_eq!(cfg.manifest_marker, "package.json");
        assert_eq!(cfg.output_filename, "README-CLARITY.md");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut cfg = Config::default();
        cfg.agent.timeout_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_temperature_range_rejected() {
        let mut cfg = Config::default();
        cfg.agent.temperature = 3.5;
        assert!(cfg.validate().is_err());
    }
}
