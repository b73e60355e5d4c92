use crate::Result;
use std::path::Path;

/// Minimal filesystem abstraction for pulling files
pub trait FileBackend {
    /// List entries in a directory (returns entry names only, in listing order)
    fn list_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Read a whole file
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Overwrite `dest` with the bytes of `src`, returning the number of bytes copied
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<u64>;
}

pub mod native;
