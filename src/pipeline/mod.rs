//! Generation Pipeline Module
//!
//! Two-stage agent pipeline (analysis → documentation) and its result
//! handling.
//!
//! ## Pipeline Architecture
//!
//! ```text
//! AnalysisTask ──(normalized result as context)──▶ DocumentationTask
//! ```
//!
//! Stages run strictly sequentially; the documentation task never starts
//! before the analysis task completed and its normalized output is bound
//! as context. Fresh task instances are built every invocation.

pub mod orchestrator;
pub mod provider;
pub mod result;
pub mod task;

pub use orchestrator::Pipeline;
pub use provider::{AgentCapability, ClaudeCodeAgent, SharedAgent, create_agent};
pub use result::{TaskResult, normalize};
pub use task::AgentTask;
