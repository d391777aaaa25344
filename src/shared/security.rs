use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Maximum report size (100 MB)
/// Reports larger than this are refused before reading.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates a resource name before it is joined onto a resource directory
///
/// # Security
/// Resource names must stay inside the resource directory, so absolute paths
/// and `..` components are refused.
///
/// # Errors
/// Returns `ReportError::InvalidResourceName` if the name is empty, absolute,
/// or contains a parent-directory component
pub fn validate_resource_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| ReportError::InvalidResourceName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("resource name is empty").into());
    }

    let path = Path::new(name);
    if path.is_absolute() || path.has_root() {
        return Err(invalid("resource names must be relative to a resource directory").into());
    }

    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        return Err(invalid("resource names must not leave the resource directory").into());
    }

    Ok(())
}

/// Validates that a path is a regular file and not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is checked, not its target.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
