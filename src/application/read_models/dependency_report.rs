//! Loaded dependency report
//!
//! Populated once by `LoadReportUseCase` and immutable afterwards, so a
//! single instance can be shared (e.g. behind an `Arc`) by any number of
//! readers.

use crate::ports::inbound::DependencyQueryPort;
use crate::report::domain::Dependency;
use crate::report::services::NamespaceFilter;

/// Current and outdated dependencies read from a versions report
///
/// A report that failed to load is empty; callers cannot tell the two apart
/// through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    current: Vec<Dependency>,
    outdated: Vec<Dependency>,
}

impl DependencyReport {
    pub fn new(current: Vec<Dependency>, outdated: Vec<Dependency>) -> Self {
        Self { current, outdated }
    }

    /// A report with no dependencies, the result of a failed load
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Dependency] {
        &self.current
    }

    pub fn fint_dependencies(&self) -> Vec<&Dependency> {
        NamespaceFilter::fint().filter(&self.current)
    }

    pub fn outdated(&self) -> &[Dependency] {
        &self.outdated
    }

    /// Current dependencies whose group contains `namespace`, in report order
    pub fn in_namespace(&self, namespace: &str) -> Vec<&Dependency> {
        NamespaceFilter::new(namespace).filter(&self.current)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.outdated.is_empty()
    }
}

impl DependencyQueryPort for DependencyReport {
    fn all(&self) -> &[Dependency] {
        DependencyReport::all(self)
    }

    fn fint_dependencies(&self) -> Vec<&Dependency> {
        DependencyReport::fint_dependencies(self)
    }

    fn outdated(&self) -> &[Dependency] {
        DependencyReport::outdated(self)
    }
}
