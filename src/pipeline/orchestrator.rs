//! Pipeline Orchestrator
//!
//! Builds and runs the two-stage task graph: the analysis task executes
//! first, its normalized result is bound as context to the documentation
//! task, and the documentation task's raw result is returned for the
//! caller to normalize. Each invocation constructs fresh task instances;
//! there is no retry and either stage's failure aborts the run.

use tracing::{debug, info};

use super::provider::SharedAgent;
use super::result::{TaskResult, normalize};
use super::task::{build_analysis_task, build_documentation_task};
use crate::analysis::AnalysisSummary;
use crate::types::{ClarityError, FileRecord, Result};

/// Two-stage documentation pipeline
pub struct Pipeline {
    analyst: SharedAgent,
    writer: SharedAgent,
}

impl Pipeline {
    pub fn new(analyst: SharedAgent, writer: SharedAgent) -> Self {
        Self { analyst, writer }
    }

    /// Both stages backed by the same agent capability
    pub fn with_agent(agent: SharedAgent) -> Self {
        Self {
            analyst: agent.clone(),
            writer: agent,
        }
    }

    /// Run the pipeline over the discovered files and their analysis
    /// summary, returning the documentation task's raw result.
    pub async fn run(
        &self,
        files: &[FileRecord],
        summary: &AnalysisSummary,
    ) -> Result<TaskResult> {
        info!(
            "Pipeline: analysis stage starting ({} files, provider={})",
            files.len(),
            self.analyst.name()
        );
        let analysis_task = build_analysis_task(files, summary);
        let analysis_raw = self
            .analyst
            .execute(&analysis_task)
            .await
            .map_err(|e| ClarityError::analysis(e.to_string()))?;

        // The documentation stage consumes the normalized analysis result,
        // never the raw one.
        let analysis_text = normalize(&analysis_raw);
        debug!(
            "Pipeline: analysis stage complete ({} chars of context)",
            analysis_text.len()
        );

        info!(
            "Pipeline: documentation stage starting (provider={})",
            self.writer.name()
        );
        let documentation_task = build_documentation_task(&analysis_text);
        self.writer
            .execute(&documentation_task)
            .await
            .map_err(|e| ClarityError::documentation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::provider::testing::{FailingAgent, StaticAgent};
    use crate::types::StageKind;
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    fn fixture_files() -> Vec<FileRecord> {
        vec![FileRecord::new(
            PathBuf::from("/p/src/app.py"),
            Path::new("/p"),
        )]
    }

    fn fixture_summary() -> AnalysisSummary {
        AnalysisSummary {
            text: "1 source file.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_writer_receives_normalized_analysis_context() {
        let agent = Arc::new(StaticAgent::new(vec![
            TaskResult::Report {
                output: "analysis report".to_string(),
            },
            TaskResult::Text("# README".to_string()),
        ]));
        let pipeline = Pipeline::with_agent(agent.clone());

        let raw = pipeline
            .run(&fixture_files(), &fixture_summary())
            .await
            .unwrap();
        assert_eq!(raw, TaskResult::Text("# README".to_string()));

        let seen = agent.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].context.is_none());
        // Context is the normalized text, not the raw result's serialization
        assert_eq!(seen[1].context.as_deref(), Some("analysis report"));
    }

    #[tokio::test]
    async fn test_mapping_result_normalized_before_binding() {
        let agent = Arc::new(StaticAgent::new(vec![
            TaskResult::from_value(json!({"result": "from mapping"})),
            TaskResult::Text("done".to_string()),
        ]));
        let pipeline = Pipeline::with_agent(agent.clone());
        pipeline
            .run(&fixture_files(), &fixture_summary())
            .await
            .unwrap();

        let seen = agent.seen.lock().unwrap();
        assert_eq!(seen[1].context.as_deref(), Some("from mapping"));
    }

    #[tokio::test]
    async fn test_analysis_failure_aborts_before_documentation() {
        let pipeline = Pipeline::with_agent(Arc::new(FailingAgent));
        let err = pipeline
            .run(&fixture_files(), &fixture_summary())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClarityError::Stage {
                stage: StageKind::Analysis,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_documentation_failure_classified() {
        let analyst = Arc::new(StaticAgent::text("report"));
        let pipeline = Pipeline::new(analyst, Arc::new(FailingAgent));
        let err = pipeline
            .run(&fixture_files(), &fixture_summary())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClarityError::Stage {
                stage: StageKind::Documentation,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_two_runs_identical_output() {
        let files = fixture_files();
        let summary = fixture_summary();
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let agent = Arc::new(StaticAgent::new(vec![
                TaskResult::Text("report".to_string()),
                TaskResult::Text("# README".to_string()),
            ]));
            let pipeline = Pipeline::with_agent(agent);
            outputs.push(normalize(&pipeline.run(&files, &summary).await.unwrap()));
        }
        assert_eq!(outputs[0], outputs[1]);
    }
}
