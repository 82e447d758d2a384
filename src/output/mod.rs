//! Triplet output

mod order;

use std::io::Write;

use tracing::debug;

use crate::config::SortMode;
use crate::error::Result;
use crate::model::Table;

pub use order::{compare_labels, numeric_key, sort_labels};

/// Writes one `outer inner value` line per table cell
pub struct TripletWriter {
    sort: SortMode,
}

impl TripletWriter {
    pub fn new(sort: SortMode) -> Self {
        Self { sort }
    }

    /// Emit every cell; returns the number of lines written
    pub fn write(&self, table: &Table, writer: &mut dyn Write) -> Result<usize> {
        let mut outer: Vec<&str> = table.rows().map(|(label, _)| label).collect();
        sort_labels(&mut outer, self.sort);

        let mut count = 0;
        for row_label in outer {
            let Some(row) = table.row(row_label) else {
                continue;
            };
            let mut inner: Vec<&str> = row.keys().map(String::as_str).collect();
            sort_labels(&mut inner, self.sort);

            for col_label in inner {
                if let Some(value) = row.get(col_label) {
                    writeln!(writer, "{} {} {}", row_label, col_label, value)?;
                    count += 1;
                }
            }
        }

        writer.flush()?;
        debug!(triplets = count, sort = ?self.sort, "wrote triplets");
        Ok(count)
    }
}
