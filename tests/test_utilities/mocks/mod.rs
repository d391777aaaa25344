/// Mock implementations for testing
mod mock_resource_reader;

pub use mock_resource_reader::MockResourceReader;
