//! Code Analysis Module
//!
//! The analyzer is an external capability behind the `ProjectAnalyzer`
//! trait: it inspects the discovered file set and produces a structured
//! report, then condenses that report into a generation-ready summary.
//! The stage itself only sequences the two calls.

pub mod heuristic;

pub use heuristic::HeuristicAnalyzer;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{FileRecord, Result};

// =============================================================================
// Analyzer Output Types
// =============================================================================

/// Structured analysis report over the full discovered file set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredReport {
    /// Resolved project root the analysis was bound to
    pub root: PathBuf,
    /// File counts per detected language, in stable order
    pub languages: BTreeMap<String, usize>,
    /// Likely entry-point files (relative paths)
    pub entry_points: Vec<String>,
    /// Total files analyzed
    pub total_files: usize,
}

/// Condensed, generation-ready representation of a structured report.
///
/// Produced once per run and consumed as pipeline input; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub text: String,
}

// =============================================================================
// Analyzer Capability
// =============================================================================

/// External analysis capability over a discovered file set
pub trait ProjectAnalyzer: Send + Sync {
    /// Produce a structured report for the project rooted at `root`
    fn analyze_project(&self, root: &Path, files: &[FileRecord]) -> Result<StructuredReport>;

    /// Condense a structured report into a generation-ready summary
    fn summarize_analysis(&self, report: &StructuredReport) -> Result<AnalysisSummary>;
}

// =============================================================================
// Analysis Stage
// =============================================================================

/// Pipeline stage sequencing the analyzer's two calls
pub struct AnalysisStage<'a> {
    analyzer: &'a dyn ProjectAnalyzer,
}

impl<'a> AnalysisStage<'a> {
    pub fn new(analyzer: &'a dyn ProjectAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Run analysis over the discovered files and reduce it to a summary
    pub fn summarize(&self, root: &Path, files: &[FileRecord]) -> Result<AnalysisSummary> {
        debug!("Analyzing {} files under {}", files.len(), root.display());
        let report = self.analyzer.analyze_project(root, files)?;
        self.analyzer.summarize_analysis(&report)
    }
}
