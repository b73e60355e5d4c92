use crate::backend::FileBackend;
use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Native filesystem backend using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileBackend {
    /// Replace the destination through a temp file + rename instead of
    /// truncating it in place.
    pub atomic: bool,
}

impl NativeFileBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic() -> Self {
        Self { atomic: true }
    }

    fn replace_atomically(src: &Path, dest: &Path) -> io::Result<u64> {
        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let permissions = fs::metadata(dest).map(|m| m.permissions()).ok();

        let mut source = fs::File::open(src)?;
        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        let bytes = io::copy(&mut source, staged.as_file_mut())?;
        staged.as_file().sync_all()?;
        if let Some(permissions) = permissions {
            fs::set_permissions(staged.path(), permissions)?;
        }
        staged.persist(dest).map_err(|e| e.error)?;
        Ok(bytes)
    }
}

impl FileBackend for NativeFileBackend {
    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(path)
            .and_then(|iter| {
                iter.map(|res| res.map(|e| e.file_name().to_string_lossy().to_string()))
                    .collect::<io::Result<Vec<_>>>()
            })
            .map_err(|source| Error::DirectoryListing {
                dir: path.to_path_buf(),
                source,
            })?;
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64> {
        let copied = if self.atomic {
            Self::replace_atomically(src, dest)
        } else {
            fs::copy(src, dest)
        };
        copied.map_err(|source| Error::Copy {
            source_path: src.to_path_buf(),
            destination: dest.to_path_buf(),
            source,
        })
    }
}
