use crate::report::domain::{Dependency, QueryPath};
use crate::shared::error::ReportError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::Value;

/// DependencyExtractor - Pulls dependency lists out of a parsed report
///
/// The report is parsed once into a generic JSON tree; each query path then
/// selects an array node whose elements are deserialized into `Dependency`.
pub struct DependencyExtractor;

impl DependencyExtractor {
    /// Extracts the dependency list selected by `path`
    ///
    /// # Arguments
    /// * `document` - The parsed report
    /// * `path` - Query path selecting an array of dependency objects
    ///
    /// # Returns
    /// The dependencies in document order
    ///
    /// # Errors
    /// - `QueryPathNotFound` if the path does not match the document
    /// - `QueryTypeMismatch` if the selected node is not an array, or one of
    ///   its elements is not a dependency record
    pub fn extract(document: &Value, path: &QueryPath) -> Result<Vec<Dependency>> {
        let node = path.resolve(document)?;

        let elements = node.as_array().ok_or_else(|| ReportError::QueryTypeMismatch {
            path: path.to_string(),
            details: format!("expected an array, found {}", json_type_name(node)),
        })?;

        elements
            .iter()
            .enumerate()
            .map(|(i, element)| {
                Dependency::deserialize(element).map_err(|e| {
                    anyhow::Error::from(ReportError::QueryTypeMismatch {
                        path: path.to_string(),
                        details: format!("element {} is not a dependency: {}", i, e),
                    })
                })
            })
            .collect()
    }

    /// Parses `query` and extracts the dependencies it selects
    ///
    /// # Errors
    /// As `extract`, plus `InvalidQueryPath` if `query` does not parse
    pub fn extract_query(document: &Value, query: &str) -> Result<Vec<Dependency>> {
        let path = QueryPath::parse(query)?;
        Self::extract(document, &path)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
