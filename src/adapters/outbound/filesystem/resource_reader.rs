use crate::ports::outbound::ResourceReader;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_regular_file, validate_resource_name, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default resource directory, relative to the working directory
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

/// ResourceDirectoryReader adapter for reading resources from the file system
///
/// Holds an ordered resource path. A resource is read from the first
/// directory that contains it.
#[derive(Debug, Clone)]
pub struct ResourceDirectoryReader {
    roots: Vec<PathBuf>,
}

impl ResourceDirectoryReader {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Reader over a single resource directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(vec![root.into()])
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Finds the first root holding `name`, without reading it
    ///
    /// A dangling symlink does not count as holding the resource; a live one
    /// does and is refused when read.
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        validate_resource_name(name)?;

        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| {
                ReportError::ResourceNotFound {
                    name: name.to_string(),
                    searched: self.describe_roots(),
                }
                .into()
            })
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let read_error = |details: String| ReportError::ResourceReadError {
            path: path.to_path_buf(),
            details,
        };

        validate_regular_file(path, MAX_FILE_SIZE).map_err(|e| read_error(e.to_string()))?;

        fs::read_to_string(path).map_err(|e| read_error(e.to_string()).into())
    }

    fn describe_roots(&self) -> String {
        if self.roots.is_empty() {
            return "no resource directories configured".to_string();
        }
        self.roots
            .iter()
            .map(|root| root.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ResourceDirectoryReader {
    fn default() -> Self {
        Self::with_root(DEFAULT_RESOURCE_DIR)
    }
}

impl ResourceReader for ResourceDirectoryReader {
    fn read_resource(&self, name: &str) -> Result<String> {
        let path = self.locate(name)?;
        self.safe_read_file(&path)
    }
}
