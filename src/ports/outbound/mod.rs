/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach external systems (here only the resource path).
pub mod resource_reader;

pub use resource_reader::ResourceReader;
