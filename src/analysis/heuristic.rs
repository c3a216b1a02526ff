//! Heuristic Project Analyzer
//!
//! Default `ProjectAnalyzer` implementation working from file metadata
//! only: language detection by extension and entry-point guessing by file
//! name. It never reads file contents, keeping the analysis stage cheap
//! and deterministic.

use std::collections::BTreeMap;
use std::path::Path;

use super::{AnalysisSummary, ProjectAnalyzer, StructuredReport};
use crate::types::{FileRecord, Result};

/// File stems commonly used for application entry points
const ENTRY_POINT_STEMS: &[&str] = &["main", "index", "app", "server"];

/// Map an allowed extension to its language name
fn language_for_extension(ext: &str) -> &'static str {
    match ext {
        "py" => "Python",
        "js" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "java" => "Java",
        _ => "Other",
    }
}

#[derive(Debug, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectAnalyzer for HeuristicAnalyzer {
    fn analyze_project(&self, root: &Path, files: &[FileRecord]) -> Result<StructuredReport> {
        let mut languages: BTreeMap<String, usize> = BTreeMap::new();
        let mut entry_points = Vec::new();

        for file in files {
            let language = language_for_extension(&file.extension);
            *languages.entry(language.to_string()).or_insert(0) += 1;

            let stem = file
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            if ENTRY_POINT_STEMS.contains(&stem) {
                entry_points.push(file.display_relative());
            }
        }

        Ok(StructuredReport {
            root: root.to_path_buf(),
            languages,
            entry_points,
            total_files: files.len(),
        })
    }

    fn summarize_analysis(&self, report: &StructuredReport) -> Result<AnalysisSummary> {
        let mut lines = Vec::new();
        lines.push(format!(
            "Project at {} contains {} source files.",
            report.root.display(),
            report.total_files
        ));

        if !report.languages.is_empty() {
            let breakdown = report
                .languages
                .iter()
                .map(|(lang, count)| format!("{} ({})", lang, count))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Languages: {}.", breakdown));
        }

        if !report.entry_points.is_empty() {
            lines.push(format!(
                "Likely entry points: {}.",
                report.entry_points.join(", ")
            ));
        }

        Ok(AnalysisSummary {
            text: lines.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str) -> FileRecord {
        FileRecord::new(PathBuf::from(path), Path::new("/proj"))
    }

    #[test]
    fn test_language_counts() {
        let analyzer = HeuristicAnalyzer::new();
        let files = vec![
            record("/proj/src/app.py"),
            record("/proj/src/util.py"),
            record("/proj/web/index.tsx"),
            record("/proj/Main.java"),
        ];
        let report = analyzer.analyze_project(Path::new("/proj"), &files).unwrap();
        assert_eq!(report.languages.get("Python"), Some(&2));
        assert_eq!(report.languages.get("TypeScript"), Some(&1));
        assert_eq!(report.languages.get("Java"), Some(&1));
        assert_eq!(report.total_files, 4);
    }

    #[test]
    fn test_entry_point_detection() {
        let analyzer = HeuristicAnalyzer::new();
        let files = vec![record("/proj/src/app.py"), record("/proj/lib/helpers.py")];
        let report = analyzer.analyze_project(Path::new("/proj"), &files).unwrap();
        assert_eq!(report.entry_points, vec!["src/app.py".to_string()]);
    }

    #[test]
    fn test_summary_renders_report() {
        let analyzer = HeuristicAnalyzer::new();
        let files = vec![record("/proj/index.js")];
        let report = analyzer.analyze_project(Path::new("/proj"), &files).unwrap();
        let summary = analyzer.summarize_analysis(&report).unwrap();
        assert!(summary.text.contains("1 source files"));
        assert!(summary.text.contains("JavaScript (1)"));
        assert!(summary.text.contains("index.js"));
    }

    #[test]
    fn test_summary_is_deterministic() {
        let analyzer = HeuristicAnalyzer::new();
        let files = vec![
            record("/proj/z.ts"),
            record("/proj/a.py"),
            record("/proj/m.java"),
        ];
        let report = analyzer.analyze_project(Path::new("/proj"), &files).unwrap();
        let first = analyzer.summarize_analysis(&report).unwrap();
        let second = analyzer.summarize_analysis(&report).unwrap();
        assert_eq!(first, second);
    }
}
