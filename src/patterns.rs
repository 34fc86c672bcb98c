//! Compiled regex patterns for ranking extraction.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches the heading that names the snapshot year, e.g.
/// `<h3 align="center">Popularity in 1990</h3>`.
///
/// Group 1 is the four-digit year.
pub static YEAR_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Popularity\sin\s(\d\d\d\d)").expect("YEAR_MARKER regex")
});

/// Matches one ranking row, e.g.
/// `<tr align="right"><td>1</td><td>Michael</td><td>Jessica</td>`.
///
/// Groups: 1 = rank, 2 = boy name, 3 = girl name.
pub static RANK_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<td>(\d+)</td><td>(\w+)</td><td>(\w+)</td>").expect("RANK_ROW regex")
});
