use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a dependency report.
///
/// None of these reach callers of the report accessors: the load use case
/// logs them and falls back to empty dependency lists.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report resource not found: {name} (searched: {searched})\n\n💡 Hint: Place the report in one of the resource directories or set fint.dependencies.report-file")]
    ResourceNotFound { name: String, searched: String },

    #[error("Invalid resource name: {name:?}\nReason: {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Failed to read report resource: {path}\nDetails: {details}")]
    ResourceReadError { path: PathBuf, details: String },

    #[error("Report resource {name} is not valid JSON\nDetails: {details}\n\n💡 Hint: Regenerate the report with the versions plugin")]
    MalformedJson { name: String, details: String },

    #[error("Invalid query path {path:?}: {reason}")]
    InvalidQueryPath { path: String, reason: String },

    #[error("Query path {path} not found in report (no match for '{segment}')")]
    QueryPathNotFound { path: String, segment: String },

    #[error("Query path {path} does not select a dependency list: {details}")]
    QueryTypeMismatch { path: String, details: String },
}
