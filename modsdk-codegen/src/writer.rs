//! Output file writing.

use crate::error::CodegenError;
use std::path::Path;

/// Writes generated header text to `path`, creating parent directories.
///
/// # Errors
/// Returns `CodegenError::Io` if a directory or the file cannot be written.
pub fn write_header(path: &Path, contents: &str) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote header");
    Ok(())
}
