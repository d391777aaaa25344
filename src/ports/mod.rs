/// Ports module - the seams between the report loader and the outside
///
/// Inbound ports are the read interfaces consumers of a loaded report use;
/// outbound ports are what the load use case needs from infrastructure.
pub mod inbound;
pub mod outbound;
