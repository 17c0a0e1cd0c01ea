use crate::shared::error::ResolutionError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Maximum file size for security (100 MB)
/// This prevents DoS attacks via excessively large scan results or content files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is checked, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
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

/// Validates that a path taken from scan data stays inside its base directory
///
/// Absolute paths and `..` components are rejected.
pub fn validate_contained_path(relative: &Path) -> Result<()> {
    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });

    if escapes {
        return Err(ResolutionError::SecurityError {
            path: relative.to_path_buf(),
            reason: "Path leaves the package content directory".to_string(),
            hint: "Reference files inside the extracted package sources only".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a file after the regular-file and size checks
pub fn read_checked_file(path: &Path, file_description: &str) -> Result<String> {
    validate_checked_file(path, file_description)?;

    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// Like [`read_checked_file`], but invalid UTF-8 is replaced instead of failing
///
/// Used for license and notice texts, which are often Latin-1 encoded.
pub fn read_checked_file_lossy(path: &Path, file_description: &str) -> Result<String> {
    validate_checked_file(path, file_description)?;

    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Validates that `path` resolves to a location below `root`
///
/// Both paths are canonicalized, so symlinked directories on the way are followed.
pub fn validate_within_root(path: &Path, root: &Path) -> Result<()> {
    let canonical_root = root.canonicalize().map_err(|e| read_error(root, e))?;
    let canonical = path.canonicalize().map_err(|e| read_error(path, e))?;

    if !canonical.starts_with(&canonical_root) {
        return Err(ResolutionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Path resolves outside of {}", root.display()),
            hint: "Symbolic links must not point out of the permitted directory".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_checked_file(path: &Path, file_description: &str) -> Result<()> {
    validate_regular_file(path, file_description)?;
    let size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?
        .len();
    validate_file_size(size, path, MAX_FILE_SIZE)
}

fn read_error(path: &Path, e: std::io::Error) -> anyhow::Error {
    ResolutionError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    }
    .into()
}
