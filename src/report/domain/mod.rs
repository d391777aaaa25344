pub mod dependency;
pub mod query_path;

pub use dependency::{AvailableVersions, Dependency};
pub use query_path::{QueryPath, Segment};
