use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ReportError, Result};

/// Write `bytes` to `path` atomically.
///
/// The data goes to a temporary file in the target directory which is then
/// renamed over `path`. On any failure the temporary file is removed when it
/// is dropped and an existing file at `path` is left untouched. Missing parent
/// directories are created.
///
/// # Errors
/// Returns [`ReportError::Output`] if any step fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let output_error = |source| ReportError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(output_error)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(output_error)?;
    temp.write_all(bytes).map_err(output_error)?;
    temp.as_file().sync_all().map_err(output_error)?;
    temp.persist(path).map_err(|e| output_error(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "output written");
    Ok(())
}

#[cfg(test)]
#[path = "write_tests.rs"]
mod tests;
