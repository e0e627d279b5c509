//! Error types for the alternate icon check.

use std::path::PathBuf;

use thiserror::Error;

/// Failure that prevented the project file from being checked.
///
/// A missing marker is not an error; it is reported through
/// [`CheckReport`](crate::CheckReport).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The project file could not be opened or read as UTF-8 text.
    #[error("Failed to read project file {}: {source}", path.display())]
    Read {
        /// The project file path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// The I/O error kind behind this failure.
    #[must_use]
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Read { source, .. } => source.kind(),
        }
    }
}
