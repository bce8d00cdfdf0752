use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::{InconsistencyRecord, Report};

pub const REPORT_JSON_FILE: &str = "inconsistency_analysis.json";
pub const REPORT_MARKDOWN_FILE: &str = "inconsistency_analysis.md";

/// Files produced by [`ReportFormatter::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Renders and persists inconsistency reports.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Human-readable Markdown rendering of a report.
    pub fn to_markdown(report: &Report) -> String {
        let mut text = String::from("# Inconsistency Analysis Across Interviews\n\n");

        if let Some(message) = &report.message {
            text.push_str(&format!("_{}_\n\n", message));
        }
        text.push_str(&format!(
            "Total potential inconsistencies found: {}\n\n",
            report.total_inconsistencies
        ));

        text.push_str(&format!("## Contradictions ({})\n\n", report.contradictions.len()));
        if report.contradictions.is_empty() {
            text.push_str("No direct contradictions found.\n\n");
        } else {
            for (i, record) in report.contradictions.iter().enumerate() {
                write_entry(&mut text, "Contradiction", i + 1, record);
            }
        }

        text.push_str(&format!(
            "## Similar Statements Across Interviews ({})\n\n",
            report.similar_statements.len()
        ));
        if report.similar_statements.is_empty() {
            text.push_str("No similar statements found across interviews.\n\n");
        } else {
            for (i, record) in report.similar_statements.iter().enumerate() {
                write_entry(&mut text, "Similar Statement", i + 1, record);
            }
        }

        text
    }

    /// Write the report as JSON and Markdown into `dir`, creating it if needed.
    pub fn write(report: &Report, dir: &Path) -> Result<ReportPaths> {
        fs::create_dir_all(dir)?;

        let paths = ReportPaths {
            json: dir.join(REPORT_JSON_FILE),
            markdown: dir.join(REPORT_MARKDOWN_FILE),
        };

        fs::write(&paths.json, serde_json::to_string_pretty(report)?)?;
        fs::write(&paths.markdown, Self::to_markdown(report))?;

        info!(
            json = %paths.json.display(),
            markdown = %paths.markdown.display(),
            "Inconsistency analysis saved"
        );
        Ok(paths)
    }
}

fn write_entry(text: &mut String, heading: &str, number: usize, record: &InconsistencyRecord) {
    text.push_str(&format!("### {} {}\n\n", heading, number));
    text.push_str(&format!("**Speaker:** {}\n", record.speaker));
    text.push_str(&format!(
        "**Interviews:** {} vs {}\n\n",
        record.interview_id_1, record.interview_id_2
    ));
    text.push_str(&format!(
        "**Statement in {}** [{}]:\n\"{}\"\n\n",
        record.interview_id_1, record.statement_1.start_timestamp, record.statement_1.text
    ));
    text.push_str(&format!(
        "**Statement in {}** [{}]:\n\"{}\"\n\n",
        record.interview_id_2, record.statement_2.start_timestamp, record.statement_2.text
    ));
    text.push_str(&format!("**Similarity score:** {:.2}\n\n", record.similarity_score));
    text.push_str("---\n\n");
}
