use std::fmt;

/// Errors raised by the versioned file store.
///
/// A missing file is not an error: lookups return `None`/omit the id, since
/// historical submissions may reference files deleted long after submission.
#[derive(Debug)]
pub enum FileStoreError {
    /// The store cannot be queried at all. Callers must propagate this rather
    /// than render "no file".
    Unavailable(String),
    /// An I/O error occurred.
    Io(std::io::Error),
}

impl fmt::Display for FileStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "file store unavailable: {msg}"),
            Self::Io(err) => write!(f, "file store IO error: {err}"),
        }
    }
}

impl std::error::Error for FileStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for FileStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
