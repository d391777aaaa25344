use crate::report::domain::Dependency;

/// DependencyQueryPort - Inbound port for reading a loaded report
///
/// All methods are pure reads of state fixed at load time. A report that
/// failed to load answers every query with an empty list.
pub trait DependencyQueryPort {
    /// All current dependencies, in report order
    fn all(&self) -> &[Dependency];

    /// Current dependencies whose group contains `no.fint`, in report order
    fn fint_dependencies(&self) -> Vec<&Dependency>;

    /// Dependencies with newer versions available, in report order
    fn outdated(&self) -> &[Dependency];
}
