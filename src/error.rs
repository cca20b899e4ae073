use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline failures. Data-level gaps (blank emails, blank
/// company names, fewer than five distinct domains) are not errors;
/// they degrade to placeholder rows in the report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to parse spreadsheet: {0}")]
    Parse(String),
    #[error("missing required columns: {}", .0.join(", "))]
    Schema(Vec<String>),
    #[error("the spreadsheet contains no data rows")]
    EmptyData,
}
