//! Driver configuration.
//!
//! `Options` is built once from the command line and passed by value to
//! [`crate::cli::run`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to an input path to name its summary file.
pub const SUMMARY_SUFFIX: &str = ".summary";

/// Configuration for one driver run.
///
/// # Example
///
/// ```rust
/// use babynames::Options;
///
/// let options = Options {
///     summary_file: true,
///     files: vec!["baby1990.html".into()],
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Write each report to `<input>.summary` instead of standard output.
    ///
    /// Default: `false`
    pub summary_file: bool,

    /// Input files, processed in order.
    pub files: Vec<PathBuf>,
}

impl Options {
    /// Reject a configuration with no input files.
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::Usage("at least one input file is required".into()));
        }
        Ok(())
    }

    /// Summary file path for an input: the input path with `.summary`
    /// appended (`baby1990.html` → `baby1990.html.summary`).
    #[must_use]
    pub fn summary_path(input: &Path) -> PathBuf {
        let mut name = OsString::from(input.as_os_str());
        name.push(SUMMARY_SUFFIX);
        PathBuf::from(name)
    }
}
