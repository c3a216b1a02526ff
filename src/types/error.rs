//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//! Every failure is classified into one of the run-level error kinds that
//! surface in the machine-readable status line.
//!
//! ## Error Kinds
//!
//! - **InvalidInput**: caller path missing or not a directory
//! - **NoRelevantFiles**: discovery produced an empty file set
//! - **StageFailure**: a pipeline stage raised or returned unusable output
//! - **EmptyGeneration**: normalization yielded no README content
//! - **PersistenceFailure**: the artifact could not be written
//!
//! ## Design Principles
//!
//! - Single unified error type (ClarityError) for the entire application
//! - Structured error variants with context for better debugging
//! - Kind-based classification for the single-line error contract
//! - No panic/unwrap - all failures propagate to the run boundary

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Pipeline Stages
// =============================================================================

/// Pipeline stage identifier, carried by stage-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Analysis task (code analyst agent)
    Analysis,
    /// Documentation task (README writer agent)
    Documentation,
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis => write!(f, "analysis"),
            Self::Documentation => write!(f, "documentation"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ClarityError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Run Errors
    // -------------------------------------------------------------------------
    /// Caller-supplied path is missing or not a directory
    #[error("invalid project path: {}", .0.display())]
    InvalidInput(PathBuf),

    /// Discovery found no source files eligible for analysis
    #[error("no relevant source files found under {}", .0.display())]
    NoRelevantFiles(PathBuf),

    /// A pipeline stage raised or returned unusable output
    #[error("{stage} stage failed: {message}")]
    Stage { stage: StageKind, message: String },

    /// Normalization produced an empty README payload
    #[error("pipeline produced no README content")]
    EmptyGeneration,

    /// The README artifact could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Agent provider failed before a stage could classify it
    #[error("agent provider error: {0}")]
    Provider(String),

    #[error("config error: {0}")]
    Config(String),
}

impl ClarityError {
    /// Create a stage failure for the analysis task
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Stage {
            stage: StageKind::Analysis,
            message: message.into(),
        }
    }

    /// Create a stage failure for the documentation task
    pub fn documentation(message: impl Into<String>) -> Self {
        Self::Stage {
            stage: StageKind::Documentation,
            message: message.into(),
        }
    }

    /// Classify this error for the machine-readable error line
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::NoRelevantFiles(_) => "NoRelevantFiles",
            Self::Stage { .. } => "StageFailure",
            Self::EmptyGeneration => "EmptyGeneration",
            Self::Persistence { .. } => "PersistenceFailure",
            // System and provider errors only surface from inside a stage boundary
            Self::Io(_) | Self::Json(_) | Self::Provider(_) => "StageFailure",
            Self::Config(_) => "InvalidInput",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClarityError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_kind_display() {
        assert_eq!(StageKind::Analysis.to_string(), "analysis");
        assert_eq!(StageKind::Documentation.to_string(), "documentation");
    }

    #[test]
    fn test_error_type_classification() {
        assert_eq!(
            ClarityError::InvalidInput(PathBuf::from("/nope")).error_type(),
            "InvalidInput"
        );
        assert_eq!(
            ClarityError::NoRelevantFiles(PathBuf::from("/empty")).error_type(),
            "NoRelevantFiles"
        );
        assert_eq!(
            ClarityError::analysis("boom").error_type(),
            "StageFailure"
        );
        assert_eq!(ClarityError::EmptyGeneration.error_type(), "EmptyGeneration");
        assert_eq!(
            ClarityError::Persistence {
                path: PathBuf::from("/p/README-CLARITY.md"),
                source: std::io::Error::other("disk full"),
            }
            .error_type(),
            "PersistenceFailure"
        );
    }

    #[test]
    fn test_stage_error_message() {
        let err = ClarityError::documentation("provider exited with status 1");
        assert_eq!(
            err.to_string(),
            "documentation stage failed: provider exited with status 1"
        );
    }

    #[test]
    fn test_io_error_classified_as_stage_failure() {
        let err = ClarityError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.error_type(), "StageFailure");
    }
}
