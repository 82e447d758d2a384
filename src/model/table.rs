//! Two-level label map holding the matrix cells

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered map keyed by label
pub type LabelMap<V> = IndexMap<String, V, FxBuildHasher>;

/// Inner map of one outer label: inner label to cell value
pub type Row = LabelMap<String>;

/// Sparse matrix as outer label -> (inner label -> value)
///
/// Both levels enumerate in first-insertion order. Re-inserting an existing
/// cell replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: LabelMap<Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell, returning the value it replaced
    pub fn insert(
        &mut self,
        outer: impl Into<String>,
        inner: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.rows
            .entry(outer.into())
            .or_default()
            .insert(inner.into(), value.into())
    }

    /// Look up a cell value
    pub fn get(&self, outer: &str, inner: &str) -> Option<&str> {
        self.rows
            .get(outer)
            .and_then(|row| row.get(inner))
            .map(String::as_str)
    }

    /// Inner map for an outer label
    pub fn row(&self, outer: &str) -> Option<&Row> {
        self.rows.get(outer)
    }

    /// Enumeration index of an outer label
    pub fn row_index(&self, outer: &str) -> Option<usize> {
        self.rows.get_index_of(outer)
    }

    /// Iterate rows in insertion order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &Row)> {
        self.rows.iter().map(|(label, row)| (label.as_str(), row))
    }

    /// Iterate every cell as (outer, inner, value) in insertion order
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.rows().flat_map(|(outer, row)| {
            row.iter()
                .map(move |(inner, value)| (outer, inner.as_str(), value.as_str()))
        })
    }

    /// Number of outer labels
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<O, I, V> FromIterator<(O, I, V)> for Table
where
    O: Into<String>,
    I: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (O, I, V)>>(iter: T) -> Self {
        let mut table = Table::new();
        for (outer, inner, value) in iter {
            table.insert(outer, inner, value);
        }
        table
    }
}
