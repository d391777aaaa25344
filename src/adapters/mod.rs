/// Adapters layer - Infrastructure implementations of the outbound ports
///
/// Only the filesystem resource path is provided here; other resource
/// sources plug in through `ports::outbound::ResourceReader`.
pub mod outbound;
