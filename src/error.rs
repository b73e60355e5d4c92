use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    DirectoryListing {
        dir: PathBuf,
        source: std::io::Error,
    },
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },
    Prompt(String),
    Dialog(String),
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::DirectoryListing { dir, source } => {
                write!(f, "Failed to list {}: {}", dir.display(), source)
            }
            Error::Save { path, source } => {
                write!(f, "Failed to save {}: {}", path.display(), source)
            }
            Error::Copy {
                source_path,
                destination,
                source,
            } => write!(
                f,
                "Failed to copy {} to {}: {}",
                source_path.display(),
                destination.display(),
                source
            ),
            Error::Prompt(msg) => write!(f, "Prompt error: {}", msg),
            Error::Dialog(msg) => write!(f, "Dialog error: {}", msg),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::DirectoryListing { source, .. }
            | Error::Save { source, .. }
            | Error::Copy { source, .. } => Some(source),
            Error::Prompt(_) | Error::Dialog(_) | Error::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl Error {
    /// The underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Error::Io(err) => Some(err.kind()),
            Error::DirectoryListing { source, .. }
            | Error::Save { source, .. }
            | Error::Copy { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
