//! Core ranking extraction.
//!
//! Finds the snapshot year, scans every ranking row in document order,
//! collapses duplicate names to their first-seen rank and builds the
//! alphabetized [`Report`].

use std::path::Path;

use crate::encoding;
use crate::error::{Error, Result};
use crate::patterns::{RANK_ROW, YEAR_MARKER};
use crate::rank_table::{RankTable, Row};
use crate::result::Report;

/// Extract the ranking report from document text.
///
/// Fails with [`Error::MissingYear`] before any row is scanned if the
/// year marker is absent. A document with a year but no rows yields a
/// report holding only the year.
pub fn extract(text: &str) -> Result<Report> {
    let year = find_year(text).ok_or(Error::MissingYear { path: None })?;
    log::debug!("Found year {year}");

    let mut table = RankTable::new();
    let mut row_count = 0usize;
    for row in rows(text) {
        table.record(&row);
        row_count += 1;
    }
    log::debug!("Matched {row_count} rows, {} distinct names", table.len());

    Ok(Report {
        year: year.to_string(),
        entries: table.into_entries(),
    })
}

/// Decode raw document bytes (honouring a declared charset) and extract.
///
/// Bytes that do not decode cleanly fail with [`Error::InvalidEncoding`].
pub fn extract_bytes(bytes: &[u8]) -> Result<Report> {
    let text = encoding::decode(bytes)?;
    extract(&text)
}

/// Read a whole file and extract its report.
pub fn extract_file(path: &Path) -> Result<Report> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    extract_bytes(&bytes).map_err(|e| e.with_path(path))
}

/// First year marker in the text.
fn find_year(text: &str) -> Option<&str> {
    YEAR_MARKER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// All ranking rows, non-overlapping, in document order.
fn rows(text: &str) -> impl Iterator<Item = Row<'_>> {
    RANK_ROW.captures_iter(text).filter_map(|c| {
        Some(Row {
            rank: c.get(1)?.as_str(),
            boy_name: c.get(2)?.as_str(),
            girl_name: c.get(3)?.as_str(),
        })
    })
}
