//! fint-dependencies - dependency report loader
//!
//! This library reads a versions report (JSON) once at startup and exposes
//! the current and outdated dependencies it lists, plus the subset that
//! belongs to the `no.fint` namespace.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report`): Dependency records, query paths, extraction and filtering
//! - **Application Layer** (`application`): The load use case and the loaded read model
//! - **Ports** (`ports`): Interface definitions for consumers and infrastructure
//! - **Adapters** (`adapters`): Filesystem implementation of the resource port
//! - **Shared** (`shared`): Common utilities and error types
//!
//! Loading never fails: a missing or broken report is logged at info level
//! and yields empty lists.
//!
//! # Example
//!
//! ```no_run
//! use fint_dependencies::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let config = discover_config(Path::new("."))?.unwrap_or_default();
//!
//! let reader = ResourceDirectoryReader::new(config.resource_dirs());
//! let use_case = LoadReportUseCase::new(reader);
//! let report = use_case.execute(&ReportSettings::from_config(&config));
//!
//! for dependency in report.fint_dependencies() {
//!     println!("{}", dependency);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report;
pub mod shared;

use adapters::outbound::filesystem::ResourceDirectoryReader;
use application::dto::ReportSettings;
use application::read_models::DependencyReport;
use application::use_cases::LoadReportUseCase;
use config::ConfigFile;

/// Loads the report described by `config` from its resource directories
///
/// Composition root for the common case; build `LoadReportUseCase` directly
/// to supply a different `ResourceReader`.
pub fn load_dependency_report(config: &ConfigFile) -> DependencyReport {
    let reader = ResourceDirectoryReader::new(config.resource_dirs());
    LoadReportUseCase::new(reader).execute(&ReportSettings::from_config(config))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::ResourceDirectoryReader;
    pub use crate::application::dto::ReportSettings;
    pub use crate::application::read_models::DependencyReport;
    pub use crate::application::use_cases::LoadReportUseCase;
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::load_dependency_report;
    pub use crate::ports::inbound::DependencyQueryPort;
    pub use crate::ports::outbound::ResourceReader;
    pub use crate::report::domain::{AvailableVersions, Dependency, QueryPath};
    pub use crate::report::services::{DependencyExtractor, NamespaceFilter, FINT_NAMESPACE};
    pub use crate::shared::error::ReportError;
    pub use crate::shared::Result;
}
