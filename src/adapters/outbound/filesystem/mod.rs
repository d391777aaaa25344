/// Filesystem adapters for reading resources
mod resource_reader;

pub use resource_reader::{ResourceDirectoryReader, DEFAULT_RESOURCE_DIR};
