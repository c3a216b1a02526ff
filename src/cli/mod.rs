//! CLI Output
//!
//! The process's sole observable output channel: exactly one
//! machine-readable JSON line on stdout (success) or stderr (failure).
//! Emission takes an explicit writer so no ambient stream state is
//! touched and tests can capture the payload.

use std::io::Write;

use serde::Serialize;

use crate::run::RunReport;
use crate::types::ClarityError;

/// Fixed top-level message for the error line
const RUN_FAILED_MESSAGE: &str = "Failed to generate documentation.";

#[derive(Serialize)]
struct SuccessLine<'a> {
    success: bool,
    message: &'a str,
    readme_path: String,
}

#[derive(Serialize)]
struct FailureLine<'a> {
    error: &'a str,
    error_type: &'a str,
    error_message: String,
}

/// Write the single success line for a completed run
pub fn emit_success(sink: &mut dyn Write, report: &RunReport) -> std::io::Result<()> {
    let line = SuccessLine {
        success: true,
        message: &report.message,
        readme_path: report.readme_path.to_string_lossy().to_string(),
    };
    writeln!(
        sink,
        "{}",
        serde_json::to_string(&line).map_err(std::io::Error::other)?
    )
}

/// Write the single failure line for an aborted run
pub fn emit_failure(sink: &mut dyn Write, error: &ClarityError) -> std::io::Result<()> {
    let line = FailureLine {
        error: RUN_FAILED_MESSAGE,
        error_type: error.error_type(),
        error_message: error.to_string(),
    };
    writeln!(
        sink,
        "{}",
        serde_json::to_string(&line).map_err(std::io::Error::other)?
    )
}
