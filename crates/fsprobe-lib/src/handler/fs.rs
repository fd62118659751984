//! Filesystem operations: `read-file` and `list-directory`.
//!
//! Both are read-only and re-query the filesystem on every call. Paths are
//! used as given; the only check is the optional absolute-path requirement.

use std::path::Path;

use tokio::fs;
use tracing::debug;

use super::ToolHandler;
use crate::error::ToolError;
use crate::model::{DirEntry, ListDirectoryOutput, ReadFileOutput};

impl ToolHandler {
    /// Read the whole file at `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Any I/O failure (missing file, permissions, a directory, invalid UTF-8)
    /// is returned as a [`ToolError::Io`] naming the path.
    pub async fn read_file(&self, path: &str) -> Result<ReadFileOutput, ToolError> {
        let p = self.check_path(path)?;
        let content = fs::read_to_string(p)
            .await
            .map_err(|e| ToolError::io(format!("failed to read file '{}'", p.display()), e))?;

        let out = ReadFileOutput::from_content(content);
        debug!(path = %p.display(), size = out.size, "read file");
        Ok(out)
    }

    /// List the direct children of the directory at `path`.
    ///
    /// Symlinks are classified by the link itself, so a link to a directory
    /// reports `is_directory = false`.
    pub async fn list_directory(&self, path: &str) -> Result<ListDirectoryOutput, ToolError> {
        let p = self.check_path(path)?;
        let fail = |e: std::io::Error| {
            ToolError::io(format!("failed to list directory '{}'", p.display()), e)
        };

        let mut reader = fs::read_dir(p).await.map_err(fail)?;
        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await.map_err(fail)? {
            let file_type = entry.file_type().await.map_err(fail)?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory: file_type.is_dir(),
            });
        }

        debug!(path = %p.display(), entries = entries.len(), "listed directory");
        Ok(ListDirectoryOutput { entries })
    }

    fn check_path<'a>(&self, path: &'a str) -> Result<&'a Path, ToolError> {
        let p = Path::new(path);
        if self.config().require_absolute_paths && !p.is_absolute() {
            return Err(ToolError::InvalidInput(format!(
                "path must be absolute, got '{path}'"
            )));
        }
        Ok(p)
    }
}
