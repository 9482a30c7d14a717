use std::path::Path;

use thiserror::Error;

/// Errors from the backing-file codec.
///
/// Only writes surface errors; a file that cannot be opened for reading is
/// treated as "no data yet" by the loader instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open {path} for writing: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("could not write to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn open(path: &Path, source: std::io::Error) -> Self {
        Self::Open {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }
}
