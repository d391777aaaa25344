use crate::shared::Result;

/// ResourceReader port for reading named read-only resources
///
/// This port abstracts where the report lives, so the load use case can be
/// driven by the filesystem adapter or by an in-memory mock.
pub trait ResourceReader {
    /// Reads the named resource as UTF-8 text
    ///
    /// # Arguments
    /// * `name` - Resource name relative to the resource path (e.g. `report.json`)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The resource does not exist on the resource path
    /// - The name is not a valid relative resource name
    /// - The resource cannot be read
    fn read_resource(&self, name: &str) -> Result<String>;
}

impl<R: ResourceReader + ?Sized> ResourceReader for &R {
    fn read_resource(&self, name: &str) -> Result<String> {
        (**self).read_resource(name)
    }
}
