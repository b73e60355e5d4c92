//! The document being pulled into.
//!
//! A `DocumentHost` is whatever owns the destination file while the pull runs:
//! it knows the path, whether there are unsaved edits, and how to flush them.
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::backend::FileBackend;
use crate::{Error, Result};

#[async_trait(?Send)]
pub trait DocumentHost {
    /// Path of the document on disk.
    fn file_path(&self) -> &Path;

    /// Whether the document holds edits that are not on disk yet.
    fn is_dirty(&self) -> bool;

    /// Write pending edits to disk. Resolves only once the on-disk content
    /// matches the in-memory content.
    async fn save(&mut self) -> Result<()>;
}

/// A file on disk, optionally paired with the editor's unsaved contents.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    unsaved: Option<Vec<u8>>,
}

impl FileDocument {
    /// A document with no pending edits.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            unsaved: None,
        }
    }

    /// A document whose editor buffer holds `buffer`. The buffer only counts as
    /// unsaved when it differs from what is currently on disk.
    pub fn with_buffer(
        path: impl Into<PathBuf>,
        buffer: Vec<u8>,
        backend: &dyn FileBackend,
    ) -> Result<Self> {
        let path = path.into();
        let on_disk = backend.read_file(&path)?;
        let unsaved = if on_disk == buffer {
            log::debug!("Buffer for {} matches disk", path.display());
            None
        } else {
            Some(buffer)
        };
        Ok(Self { path, unsaved })
    }

    /// The unsaved buffer, if any.
    pub fn buffer(&self) -> Option<&[u8]> {
        self.unsaved.as_deref()
    }
}

#[async_trait(?Send)]
impl DocumentHost for FileDocument {
    fn file_path(&self) -> &Path {
        &self.path
    }

    fn is_dirty(&self) -> bool {
        self.unsaved.is_some()
    }

    async fn save(&mut self) -> Result<()> {
        let Some(buffer) = self.unsaved.as_ref() else {
            return Ok(());
        };
        tokio::fs::write(&self.path, buffer)
            .await
            .map_err(|source| Error::Save {
                path: self.path.clone(),
                source,
            })?;
        log::info!("Saved {} bytes to {}", buffer.len(), self.path.display());
        self.unsaved = None;
        Ok(())
    }
}
