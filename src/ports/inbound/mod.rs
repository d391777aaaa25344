/// Inbound ports (Driving ports) - Read interfaces offered to consumers
///
/// Consumers of the loaded report depend on these traits rather than on the
/// concrete read model.
pub mod dependency_query_port;

pub use dependency_query_port::DependencyQueryPort;
