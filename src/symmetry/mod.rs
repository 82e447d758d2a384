//! Symmetry validation and lower-triangular reduction
//!
//! Rows and columns share one enumeration: the insertion order of the
//! table's outer labels. A cell `[row, col]` belongs to the lower triangle
//! when the index of `col` among the outer labels is at most the index of
//! `row`.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Table;

/// First failing cell pair found by the symmetry check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Asymmetry {
    #[error("[{row},{col}] exists but [{col},{row}] does not")]
    MissingTranspose { row: String, col: String },
    #[error("[{col},{row}] exists but [{row},{col}] does not")]
    MissingCell { row: String, col: String },
    #[error("[{row},{col}] = {value} but [{col},{row}] = {transpose}")]
    ValueMismatch {
        row: String,
        col: String,
        value: String,
        transpose: String,
    },
}

/// Classify the pair `[row,col]` / `[col,row]`
pub fn check_pair(table: &Table, row: &str, col: &str) -> std::result::Result<(), Asymmetry> {
    match (table.get(row, col), table.get(col, row)) {
        (Some(value), Some(transpose)) if value == transpose => Ok(()),
        (Some(value), Some(transpose)) => Err(Asymmetry::ValueMismatch {
            row: row.to_string(),
            col: col.to_string(),
            value: value.to_string(),
            transpose: transpose.to_string(),
        }),
        (Some(_), None) => Err(Asymmetry::MissingTranspose {
            row: row.to_string(),
            col: col.to_string(),
        }),
        (None, Some(_)) => Err(Asymmetry::MissingCell {
            row: row.to_string(),
            col: col.to_string(),
        }),
        (None, None) => Ok(()),
    }
}

/// Fail unless every row is as wide as the table is tall
pub fn check_square(table: &Table) -> Result<()> {
    let rows = table.row_count();
    for (label, row) in table.rows() {
        if row.len() != rows {
            return Err(Error::Shape {
                rows,
                columns: row.len(),
                row: label.to_string(),
            });
        }
    }
    Ok(())
}

/// Fail on the first asymmetric cell pair
pub fn check_symmetric(table: &Table) -> Result<()> {
    for (row, cells) in table.rows() {
        for col in cells.keys() {
            check_pair(table, row, col)?;
        }
    }
    Ok(())
}

/// True when row `i` holds exactly the outer labels `0..=i`
pub fn is_lower_triangular(table: &Table) -> bool {
    table.rows().enumerate().all(|(ri, (_, cells))| {
        cells.len() == ri + 1
            && cells
                .keys()
                .all(|col| table.row_index(col).is_some_and(|ci| ci <= ri))
    })
}

/// Validate symmetry and keep only the lower triangle, diagonal included
///
/// A table that is already lower-triangular is returned unchanged.
pub fn reduce(table: Table) -> Result<Table> {
    if is_lower_triangular(&table) {
        debug!(rows = table.row_count(), "table already lower-triangular");
        return Ok(table);
    }

    check_square(&table)?;
    check_symmetric(&table)?;

    let mut reduced = Table::new();
    for (ri, (row, cells)) in table.rows().enumerate() {
        for (col, value) in cells {
            // check_symmetric guarantees every column is also a row
            let Some(ci) = table.row_index(col) else {
                continue;
            };
            if ci <= ri {
                reduced.insert(row, col.as_str(), value.as_str());
            }
        }
    }

    debug!(
        cells = table.cell_count(),
        kept = reduced.cell_count(),
        "reduced symmetric matrix"
    );
    Ok(reduced)
}
