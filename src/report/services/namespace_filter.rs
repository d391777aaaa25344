use crate::report::domain::Dependency;

/// Group namespace of the FINT libraries
pub const FINT_NAMESPACE: &str = "no.fint";

/// NamespaceFilter - Keeps dependencies whose group contains a namespace
///
/// Matching is a plain, case-sensitive substring test on the group, so
/// `no.fint` also matches `no.fint.provider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceFilter {
    namespace: String,
}

impl NamespaceFilter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Filter for the `no.fint` namespace
    pub fn fint() -> Self {
        Self::new(FINT_NAMESPACE)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn matches(&self, dependency: &Dependency) -> bool {
        dependency.is_in_namespace(&self.namespace)
    }

    /// Returns the matching dependencies in their original order
    pub fn filter<'a>(&self, dependencies: &'a [Dependency]) -> Vec<&'a Dependency> {
        dependencies.iter().filter(|dep| self.matches(dep)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps() -> Vec<Dependency> {
        vec![
            Dependency::new("no.fint.a", "first", "1.0"),
            Dependency::new("com.x", "second", "2.0"),
            Dependency::new("no.fint.b", "third", "3.0"),
        ]
    }

    #[test]
    fn test_fint_filter_keeps_first_and_third() {
        let deps = deps();
        let filtered = NamespaceFilter::fint().filter(&deps);
        assert_eq!(filtered, vec![&deps[0], &deps[2]]);
    }

    #[test]
    fn test_filter_no_matches() {
        let deps = deps();
        assert!(NamespaceFilter::new("org.apache").filter(&deps).is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(NamespaceFilter::fint().filter(&[]).is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let deps = vec![Dependency::new("NO.FINT", "upper", "1.0")];
        assert!(NamespaceFilter::fint().filter(&deps).is_empty());
    }

    #[test]
    fn test_namespace_accessor() {
        assert_eq!(NamespaceFilter::fint().namespace(), FINT_NAMESPACE);
    }
}
