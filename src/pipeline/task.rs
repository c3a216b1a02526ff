//! Agent Tasks
//!
//! A task is one bounded unit of pipeline work: a natural-language
//! description, an expected-output contract, and optionally the
//! normalized result of an upstream task bound as context.

use crate::analysis::AnalysisSummary;
use crate::types::FileRecord;

/// One unit of agent work
#[derive(Debug, Clone)]
pub struct AgentTask {
    /// Role framing for the executing agent
    pub role: String,
    /// Natural-language instructions
    pub description: String,
    /// Description of what a valid result looks like
    pub expected_output: String,
    /// Normalized upstream result, if any
    pub context: Option<String>,
}

/// Build the analysis task over the discovered file set.
///
/// The description embeds the file list and the condensed analysis
/// summary so the agent works only from what was actually discovered.
pub fn build_analysis_task(files: &[FileRecord], summary: &AnalysisSummary) -> AgentTask {
    let file_list = files
        .iter()
        .map(|f| format!("- `{}`", f.display_relative()))
        .collect::<Vec<_>>()
        .join("\n");

    AgentTask {
        role: "Multi-language code analyst".to_string(),
        description: format!(
            "Analyze the files below and extract a global view of the project.\n\
             \n\
             Project summary:\n{summary}\n\
             \n\
             Files to analyze:\n{file_list}\n\
             \n\
             For each file, extract:\n\
             1. Language used\n\
             2. Classes, functions, objects and hooks\n\
             3. Relationships between modules/components\n\
             4. Entry-point file(s) of the system\n\
             5. Frameworks and libraries used\n\
             6. Visible architectural patterns\n\
             7. Responsibilities of files and folders\n\
             8. Data and execution flow\n\
             \n\
             Produce a unified report that can serve as the basis for documentation.",
            summary = summary.text,
        ),
        expected_output: "Detailed, structured technical report based on the analyzed files"
            .to_string(),
        context: None,
    }
}

/// Build the documentation task, bound to the normalized analysis result.
pub fn build_documentation_task(analysis_context: &str) -> AgentTask {
    AgentTask {
        role: "Technical documentation writer".to_string(),
        description: "Based on the full system analysis, write a professional README.md \
                      containing:\n\
                      \n\
                      1. Title and general description\n\
                      2. Relevant badges (languages, status)\n\
                      3. Table of contents\n\
                      4. Installation and configuration\n\
                      5. Usage (with examples or commands)\n\
                      6. Main features and components\n\
                      7. Folder and module structure\n\
                      8. Execution flow or architecture\n\
                      9. Contributing and tests\n\
                      10. License\n\
                      \n\
                      Use Markdown correctly and adapt the content to the detected project \
                      type. Never invent data: use only what was actually analyzed."
            .to_string(),
        expected_output: "Complete, clear and technical README.md in Markdown".to_string(),
        context: Some(analysis_context.to_string()),
    }
}
