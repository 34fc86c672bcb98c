//! CLI argument parsing and the per-file driver loop

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{Error, Result};
use crate::extract::extract_file;
use crate::options::Options;
use crate::result::Report;

/// Extracts and alphabetizes baby names from html.
#[derive(Parser, Debug)]
#[command(name = "babynames", version)]
pub struct Cli {
    /// Creates a summary file (<FILE>.summary) per input instead of printing
    #[arg(long)]
    pub summaryfile: bool,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Filename(s) to parse
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Log level selected by `-v` repetitions.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    #[must_use]
    pub fn into_options(self) -> Options {
        Options {
            summary_file: self.summaryfile,
            files: self.files,
        }
    }
}

/// Process every input file in order.
///
/// Reports go to `out` unless `options.summary_file` is set, in which case
/// each one is written to `<input>.summary`. Stops at the first error.
pub fn run<W: Write>(options: Options, out: &mut W) -> Result<()> {
    options.validate()?;

    for path in &options.files {
        let report = extract_file(path)?;
        log::debug!("{}: {} names", path.display(), report.entries.len());

        if options.summary_file {
            let summary = Options::summary_path(path);
            write_summary(&summary, &report)?;
            log::info!("Wrote {}", summary.display());
        } else {
            writeln!(out, "{report}").map_err(|source| Error::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }

    out.flush().map_err(|source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

/// Create/truncate `path` and write the report plus a trailing newline.
pub fn write_summary(path: &Path, report: &Report) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{report}").map_err(io_err)?;
    out.flush().map_err(io_err)
}
