//! Agent Provider Abstraction
//!
//! Defines the `AgentCapability` trait executed by both pipeline stages.
//! The default backend shells out to the Claude Code CLI; retry and
//! fallback are deliberately absent, a failed execution aborts the run.

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use super::result::TaskResult;
use super::task::AgentTask;
use crate::config::AgentConfig;
use crate::types::{ClarityError, Result};

/// Shared agent capability handle
pub type SharedAgent = Arc<dyn AgentCapability>;

/// Capability that executes one agent task and yields a result of
/// unspecified shape
#[async_trait]
pub trait AgentCapability: Send + Sync {
    /// Execute a single task to completion
    async fn execute(&self, task: &AgentTask) -> Result<TaskResult>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

// =============================================================================
// Claude Code CLI Agent
// =============================================================================

/// Agent backend executing tasks via the Claude Code CLI.
///
/// Single-shot execution only; a non-zero exit or timeout surfaces as a
/// provider error for the owning stage to classify.
pub struct ClaudeCodeAgent {
    model: String,
    timeout_secs: u64,
    temperature: f32,
}

impl ClaudeCodeAgent {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
            temperature: config.temperature,
        }
    }

    /// Render the full prompt for one task
    fn render_prompt(task: &AgentTask) -> String {
        let mut prompt = format!(
            "You are: {role}\n\n{description}\n\nExpected output: {expected}",
            role = task.role,
            description = task.description,
            expected = task.expected_output,
        );
        if let Some(context) = &task.context {
            prompt.push_str("\n\nContext from the previous stage:\n");
            prompt.push_str(context);
        }
        prompt
    }

    /// Decode the CLI's JSON envelope into a task result
    fn decode_output(stdout: &str) -> TaskResult {
        let Ok(envelope) = serde_json::from_str::<Value>(stdout) else {
            // Not JSON at all: the raw text is the result
            return TaskResult::Text(stdout.trim().to_string());
        };

        match envelope.get("result") {
            Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
                Ok(inner) => TaskResult::from_value(inner),
                Err(_) => TaskResult::Text(text.clone()),
            },
            Some(other) => TaskResult::from_value(other.clone()),
            None => TaskResult::from_value(envelope),
        }
    }
}

#[async_trait]
impl AgentCapability for ClaudeCodeAgent {
    async fn execute(&self, task: &AgentTask) -> Result<TaskResult> {
        let prompt = Self::render_prompt(task);

        debug!(
            "Executing Claude Code CLI (model={}, temperature={})",
            self.model, self.temperature
        );

        let mut cmd = Command::new("claude");
        cmd.arg("-p")
            .arg(&prompt)
            .arg("--output-format")
            .arg("json")
            .arg("--model")
            .arg(&self.model)
            .env("CLAUDE_CODE_TEMPERATURE", self.temperature.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|e| {
            ClarityError::Provider(format!(
                "failed to spawn Claude Code CLI: {}. Is it installed?",
                e
            ))
        })?;

        let output = timeout(
            Duration::from_secs(self.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| {
            ClarityError::Provider(format!("Claude Code timed out after {}s", self.timeout_secs))
        })?
        .map_err(|e| ClarityError::Provider(format!("Claude Code execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                "process exited with non-zero status".to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(ClarityError::Provider(message));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(Self::decode_output(&stdout))
    }

    fn name(&self) -> &str {
        "claude-code"
    }
}

/// Create the agent capability configured for this run
pub fn create_agent(config: &AgentConfig) -> Result<SharedAgent> {
    match config.provider.as_str() {
        "claude-code" => Ok(Arc::new(ClaudeCodeAgent::new(config))),
        other => Err(ClarityError::Config(format!(
            "unknown provider: {}. Supported: claude-code",
            other
        ))),
    }
}

// =============================================================================
// Test Agents
// =============================================================================
