//! Name-to-rank table with first-seen-wins insertion.

use std::collections::BTreeMap;

use crate::result::NameRank;

/// One parsed ranking row: `(rank, boy name, girl name)`.
///
/// Borrows from the document text and is consumed immediately by
/// [`RankTable::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub rank: &'a str,
    pub boy_name: &'a str,
    pub girl_name: &'a str,
}

/// Mapping from name to the rank it was first seen with.
///
/// Ranks keep their textual form and are never compared numerically.
/// Once a name is present its rank is never overwritten, even if a later
/// row carries a smaller number.
#[derive(Debug, Clone, Default)]
pub struct RankTable {
    ranks: BTreeMap<String, String>,
}

impl RankTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` with `rank` unless the name is already present.
    ///
    /// Returns `true` if the entry was inserted.
    pub fn insert_if_absent(&mut self, name: &str, rank: &str) -> bool {
        if self.ranks.contains_key(name) {
            return false;
        }
        self.ranks.insert(name.to_string(), rank.to_string());
        true
    }

    /// Record both names of a row, boy column first.
    pub fn record(&mut self, row: &Row<'_>) {
        self.insert_if_absent(row.boy_name, row.rank);
        self.insert_if_absent(row.girl_name, row.rank);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.ranks.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Consume the table, yielding entries sorted ascending by name
    /// (plain byte order, so uppercase sorts before lowercase).
    #[must_use]
    pub fn into_entries(self) -> Vec<NameRank> {
        self.ranks
            .into_iter()
            .map(|(name, rank)| NameRank { name, rank })
            .collect()
    }
}
