/// Domain services operating on parsed reports
pub mod dependency_extractor;
pub mod namespace_filter;

pub use dependency_extractor::DependencyExtractor;
pub use namespace_filter::{NamespaceFilter, FINT_NAMESPACE};
