//! Error types for babynames.
//!
//! This module defines the error types returned by extraction and by the
//! command-line driver.

use std::path::PathBuf;

/// Error type for extraction and driver operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No "Popularity in YYYY" marker in the document.
    #[error("Couldn't find the year!{}", path_suffix(.path.as_ref()))]
    MissingYear {
        /// Input file, when the text came from disk.
        path: Option<PathBuf>,
    },

    /// Page bytes are not valid in the declared (or default UTF-8) encoding.
    #[error("invalid {encoding} text{}", path_suffix(.path.as_ref()))]
    InvalidEncoding {
        encoding: &'static str,
        path: Option<PathBuf>,
    },

    /// Reading an input file or writing a summary file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid driver configuration (e.g. no input files).
    #[error("usage: {0}")]
    Usage(String),

    /// A summary block could not be read back into a report.
    #[error("malformed summary: {0}")]
    MalformedSummary(String),
}

impl Error {
    /// Attach the input path to an error raised on in-memory page bytes.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::MissingYear { path: None } => Error::MissingYear {
                path: Some(path.into()),
            },
            Error::InvalidEncoding {
                encoding,
                path: None,
            } => Error::InvalidEncoding {
                encoding,
                path: Some(path.into()),
            },
            other => other,
        }
    }
}

fn path_suffix(path: Option<&PathBuf>) -> String {
    path.map(|p| format!(" ({})", p.display())).unwrap_or_default()
}

/// Result type alias for babynames operations.
pub type Result<T> = std::result::Result<T, Error>;
