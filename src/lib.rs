//! Clarity - AI-Driven README Generator
//!
//! Scans a source-code project, runs a two-stage agent pipeline
//! (analysis → documentation), and writes one consolidated
//! `README-CLARITY.md` into the resolved project root.
//!
//! ## Core Flow
//!
//! - **Discovery**: manifest-based root resolution and deterministic
//!   source-file discovery with fixed exclusion rules
//! - **Analysis**: structured project report reduced to a compact summary
//! - **Pipeline**: analysis task feeding its normalized result into the
//!   documentation task, strictly sequentially
//! - **Run control**: state-machine flow ending in exactly one JSON status
//!   line and the process exit code
//!
//! ## Quick Start
//!
//! ```ignore
//! use clarity::{Config, HeuristicAnalyzer, Pipeline, RunController};
//! use clarity::pipeline::create_agent;
//!
//! let config = Config::default();
//! let agent = create_agent(&config.agent)?;
//! let mut controller = RunController::new(
//!     config,
//!     HeuristicAnalyzer::new(),
//!     Pipeline::with_agent(agent),
//! );
//! let report = controller.execute(&project_path).await?;
//! ```
//!
//! ## Modules
//!
//! - [`discovery`]: root resolution, path filtering, file discovery
//! - [`analysis`]: analyzer capability and the analysis stage
//! - [`pipeline`]: agent tasks, providers, result normalization
//! - [`run`]: top-level run controller and persistence
//! - [`cli`]: single-line machine-readable status output

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod pipeline;
pub mod run;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{AgentConfig, Config, DiscoveryConfig};

// Error Types
pub use types::error::{ClarityError, Result, StageKind};

// Discovery
pub use discovery::{PathFilter, discover, resolve_root};

// Analysis
pub use analysis::{AnalysisStage, AnalysisSummary, HeuristicAnalyzer, ProjectAnalyzer};

// Pipeline
pub use pipeline::{AgentCapability, AgentTask, Pipeline, TaskResult, normalize};

// Run Control
pub use run::{RunController, RunReport, RunState};
