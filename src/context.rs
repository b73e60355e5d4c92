use std::path::{Path, PathBuf};

use crate::document::DocumentHost;

/// Snapshot of the active document taken when a pull starts.
///
/// It is never refreshed: if the editor moves on to another document while
/// prompts are open, the pull still targets the file captured here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocumentContext {
    pub file_path: PathBuf,
    pub file_name: String,
    /// Extension without the leading dot, empty when the name has none.
    pub extension: String,
    pub directory: PathBuf,
    pub is_dirty: bool,
}

impl ActiveDocumentContext {
    pub fn capture(document: &dyn DocumentHost) -> Self {
        Self::from_path(document.file_path(), document.is_dirty())
    }

    pub fn from_path(file_path: &Path, is_dirty: bool) -> Self {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = file_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();
        let directory = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Self {
            file_path: file_path.to_path_buf(),
            file_name,
            extension,
            directory,
            is_dirty,
        }
    }
}
