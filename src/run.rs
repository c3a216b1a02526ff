//! Run Controller
//!
//! Top-level flow for one invocation:
//!
//! ```text
//! Validating → RootResolving → Discovering → Analyzing
//!     → Generating → Normalizing → Persisting → Done
//! ```
//!
//! `Failed` is reachable from every non-terminal state. The README
//! artifact is written only after normalization succeeds, as a single
//! write-then-close; a failed run leaves no partial output file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::analysis::{AnalysisStage, ProjectAnalyzer};
use crate::config::Config;
use crate::discovery::{discover, resolve_root};
use crate::pipeline::{Pipeline, normalize};
use crate::types::{ClarityError, Result};

/// Controller state, advanced strictly forward until a terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Validating,
    RootResolving,
    Discovering,
    Analyzing,
    Generating,
    Normalizing,
    Persisting,
    Done,
    Failed,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub message: String,
    pub readme_path: PathBuf,
}

/// One-shot run controller
pub struct RunController<A: ProjectAnalyzer> {
    config: Config,
    analyzer: A,
    pipeline: Pipeline,
    state: RunState,
}

impl<A: ProjectAnalyzer> RunController<A> {
    pub fn new(config: Config, analyzer: A, pipeline: Pipeline) -> Self {
        Self {
            config,
            analyzer,
            pipeline,
            state: RunState::Validating,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn advance(&mut self, next: RunState) {
        debug!("Run state: {:?} → {:?}", self.state, next);
        self.state = next;
    }

    /// Execute the full run for a caller-supplied project path.
    ///
    /// Any failure leaves the controller in the `Failed` terminal state
    /// and propagates the classified error to the caller.
    pub async fn execute(&mut self, caller_path: &Path) -> Result<RunReport> {
        match self.execute_inner(caller_path).await {
            Ok(report) => {
                self.advance(RunState::Done);
                Ok(report)
            }
            Err(e) => {
                self.advance(RunState::Failed);
                Err(e)
            }
        }
    }

    async fn execute_inner(&mut self, caller_path: &Path) -> Result<RunReport> {
        if !caller_path.is_dir() {
            return Err(ClarityError::InvalidInput(caller_path.to_path_buf()));
        }

        self.advance(RunState::RootResolving);
        let root = resolve_root(caller_path, &self.config.discovery);

        self.advance(RunState::Discovering);
        let files = discover(&root, &self.config.discovery)?;
        info!(
            "Discovered {} relevant files under {}",
            files.len(),
            root.display()
        );

        self.advance(RunState::Analyzing);
        let summary = AnalysisStage::new(&self.analyzer).summarize(&root, &files)?;

        self.advance(RunState::Generating);
        let raw = self.pipeline.run(&files, &summary).await?;

        self.advance(RunState::Normalizing);
        let readme = normalize(&raw);
        if readme.trim().is_empty() {
            return Err(ClarityError::EmptyGeneration);
        }

        self.advance(RunState::Persisting);
        let readme_path = root.join(&self.config.discovery.output_filename);
        fs::write(&readme_path, &readme).map_err(|source| ClarityError::Persistence {
            path: readme_path.clone(),
            source,
        })?;
        info!("README written to {}", readme_path.display());

        Ok(RunReport {
            message: format!("README generated successfully at: {}", readme_path.display()),
            readme_path,
        })
    }
}
