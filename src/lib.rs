//! # babynames
//!
//! Extracts baby-name popularity rankings from yearly HTML snapshot pages
//! and produces an alphabetized `name rank` summary per page.
//!
//! ## Quick Start
//!
//! ```rust
//! use babynames::extract;
//!
//! let html = r#"<h3 align="center">Popularity in 1990</h3>
//! <tr align="right"><td>1</td><td>Michael</td><td>Jessica</td>
//! <tr align="right"><td>2</td><td>Christopher</td><td>Ashley</td>"#;
//!
//! let report = extract(html)?;
//! assert_eq!(
//!     report.lines(),
//!     ["1990", "Ashley 2", "Christopher 2", "Jessica 1", "Michael 1"]
//! );
//! # Ok::<(), babynames::Error>(())
//! ```
//!
//! ## Ranking rules
//!
//! - The year comes from the first `Popularity in YYYY` marker; without
//!   one, extraction fails with [`Error::MissingYear`].
//! - Rows are `<td>RANK</td><td>BOY</td><td>GIRL</td>` in document order.
//! - A name keeps the rank of its first appearance, whichever column.
//! - Entries are sorted by name in byte order.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Name-to-rank table with first-seen-wins insertion.
pub mod rank_table;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Command-line parsing and the per-file driver.
pub mod cli;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract, extract_bytes, extract_file};
pub use options::{Options, SUMMARY_SUFFIX};
pub use rank_table::{RankTable, Row};
pub use result::{NameRank, Report};
