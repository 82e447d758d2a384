//! Reader turning delimited matrix text into a [`Table`]

mod split;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::{Config, Delimiter, Orientation};
use crate::error::{Error, Result};
use crate::model::{Header, Table};

pub use self::split::{chomp, is_comment, split_fields};

/// Header and cells read from one input
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub header: Header,
    pub table: Table,
}

/// Reads a header line followed by labelled data lines
pub struct TableReader {
    delimiter: Delimiter,
    orientation: Orientation,
    dump: bool,
}

impl TableReader {
    /// Create a reader from the resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            delimiter: config.delimiter.clone(),
            orientation: config.orientation,
            dump: config.debug,
        }
    }

    /// Read the whole input into a table
    pub fn read<R: BufRead>(&self, input: R) -> Result<ParsedTable> {
        let mut header: Option<Header> = None;
        let mut table = Table::new();
        let mut data_lines = 0usize;
        let mut overwritten = 0usize;

        for (line_num, line) in read_lines(input)?.iter().enumerate() {
            if is_comment(line) {
                continue;
            }

            let fields = split_fields(line, &self.delimiter);

            let Some(ref header) = header else {
                header = Some(Header::new(fields.iter().map(|f| f.to_string()).collect()));
                continue;
            };

            if fields.len() != header.width() {
                return Err(Error::Format {
                    line: line_num + 1,
                    expected: header.width(),
                    found: fields.len(),
                });
            }

            let label = fields[0];
            for (column, value) in header.labels().zip(&fields[1..]) {
                let previous = match self.orientation {
                    Orientation::ByRow => table.insert(label, column, *value),
                    Orientation::ByCol => table.insert(column, label, *value),
                };
                if previous.is_some() {
                    overwritten += 1;
                }
            }
            data_lines += 1;
        }

        let header = header.unwrap_or_default();
        debug!(
            width = header.width(),
            data_lines,
            overwritten,
            cells = table.cell_count(),
            "read matrix"
        );

        if self.dump {
            dump_table(&table);
        }

        Ok(ParsedTable { header, table })
    }
}

/// Split raw input into lines without requiring UTF-8
///
/// Invalid UTF-8 sequences decode to U+FFFD. A single empty line at the
/// very end of the input is dropped; any other empty line is kept.
fn read_lines<R: BufRead>(mut input: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(chomp(&buf)).into_owned());
    }
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

/// Write every cell to the debug log
fn dump_table(table: &Table) {
    for (outer, row) in table.rows() {
        for (inner, value) in row {
            debug!(outer, inner = inner.as_str(), value = value.as_str(), "cell");
        }
    }
}

/// Open the input source: a file path, or stdin for `None` and `-`
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(Error::InputNotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
