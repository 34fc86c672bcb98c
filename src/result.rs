//! Report types for extraction output.
//!
//! A [`Report`] is the year followed by alphabetized `"name rank"` entries.
//! Its line form is what gets printed or written to a summary file.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A name and the rank it was first seen with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRank {
    pub name: String,
    /// Rank as written in the source document.
    pub rank: String,
}

impl fmt::Display for NameRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.rank)
    }
}

/// Result of extracting one snapshot file.
///
/// Entries are unique by name and sorted ascending by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Four-digit year from the "Popularity in YYYY" marker.
    pub year: String,
    pub entries: Vec<NameRank>,
}

impl Report {
    /// The report as lines: `[year, "name rank", ...]`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(self.year.clone());
        lines.extend(self.entries.iter().map(ToString::to_string));
        lines
    }

    /// Lines joined with `\n`, without a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    /// Read a summary block (as written by the driver) back into a report.
    ///
    /// The name is everything before the last space on each line.
    pub fn parse_summary(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let year = lines
            .next()
            .filter(|y| !y.is_empty())
            .ok_or_else(|| Error::MalformedSummary("missing year line".into()))?
            .to_string();

        let entries = lines
            .map(|line| {
                line.rsplit_once(' ')
                    .map(|(name, rank)| NameRank {
                        name: name.to_string(),
                        rank: rank.to_string(),
                    })
                    .ok_or_else(|| Error::MalformedSummary(format!("no rank in line {line:?}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { year, entries })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
