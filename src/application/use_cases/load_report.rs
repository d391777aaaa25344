use crate::application::dto::ReportSettings;
use crate::application::read_models::DependencyReport;
use crate::ports::outbound::ResourceReader;
use crate::report::domain::Dependency;
use crate::report::services::DependencyExtractor;
use crate::shared::error::ReportError;
use crate::shared::Result;
use serde_json::Value;

/// LoadReportUseCase - Loads the dependency report once at startup
///
/// Reading, parsing and querying all produce ordinary `Result`s; `execute`
/// is the boundary where failures are logged and replaced by empty lists.
///
/// # Type Parameters
/// * `R` - ResourceReader implementation
pub struct LoadReportUseCase<R> {
    resource_reader: R,
}

impl<R> LoadReportUseCase<R>
where
    R: ResourceReader,
{
    /// Creates a new LoadReportUseCase with an injected resource reader
    pub fn new(resource_reader: R) -> Self {
        Self { resource_reader }
    }

    /// Loads the report described by `settings`
    ///
    /// Never fails. If the report cannot be read or parsed both lists are
    /// empty; if one query cannot be evaluated only its list is empty.
    pub fn execute(&self, settings: &ReportSettings) -> DependencyReport {
        let document = match self.try_read_document(&settings.report_file) {
            Ok(document) => document,
            Err(e) => {
                log::info!(
                    "Unable to read report file {}, {}",
                    settings.report_file,
                    e
                );
                return DependencyReport::empty();
            }
        };

        let current = load_or_empty(&document, &settings.current_query);
        let outdated = load_or_empty(&document, &settings.outdated_query);

        log::debug!(
            "Loaded {} current and {} outdated dependencies from {}",
            current.len(),
            outdated.len(),
            settings.report_file
        );

        DependencyReport::new(current, outdated)
    }

    /// Reads and parses the report resource
    ///
    /// # Errors
    /// Returns the reader's error if the resource cannot be read, or
    /// `ReportError::MalformedJson` if its content is not JSON
    pub fn try_read_document(&self, report_file: &str) -> Result<Value> {
        let content = self.resource_reader.read_resource(report_file)?;

        serde_json::from_str(&content).map_err(|e| {
            ReportError::MalformedJson {
                name: report_file.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

fn load_or_empty(document: &Value, query: &str) -> Vec<Dependency> {
    DependencyExtractor::extract_query(document, query).unwrap_or_else(|e| {
        log::info!("Unable to load dependencies for query {}, {}", query, e);
        Vec::new()
    })
}
