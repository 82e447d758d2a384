//! Reader -> reducer -> emitter composition

use std::io::{BufRead, Write};

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::model::Table;
use crate::output::TripletWriter;
use crate::parser::TableReader;
use crate::symmetry;

/// Read a matrix and apply the configured reduction
pub fn build_table<R: BufRead>(input: R, config: &Config) -> Result<Table> {
    let parsed = TableReader::from_config(config).read(input)?;
    if config.symmetric {
        symmetry::reduce(parsed.table)
    } else {
        Ok(parsed.table)
    }
}

/// Convert a matrix into triplets; returns the number of triplets written
///
/// Nothing is written unless the whole input parses and validates.
pub fn convert<R: BufRead>(input: R, writer: &mut dyn Write, config: &Config) -> Result<usize> {
    let table = build_table(input, config)?;
    let count = TripletWriter::new(config.sort).write(&table, writer)?;
    info!(
        triplets = count,
        orientation = ?config.orientation,
        symmetric = config.symmetric,
        "conversion complete"
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Orientation, SortMode};
    use crate::error::Error;

    const EXAMPLE: &str = "- a b c\nd 1 - 0\ne 2 5 2\nf 1 2 3\n";
    const SYMMETRIC: &str = "# distances\n- a b c\na 0 1 2\nb 1 0 3\nc 2 3 0\n";

    fn run(input: &str, config: &Config) -> Result<String> {
        let mut buf = Vec::new();
        convert(input.as_bytes(), &mut buf, config)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    /// Rebuild a table from `outer inner value` lines
    fn rebuild(triplets: &str) -> Table {
        triplets
            .lines()
            .map(|line| {
                let mut parts = line.splitn(3, ' ');
                let outer = parts.next().unwrap().to_string();
                let inner = parts.next().unwrap().to_string();
                let value = parts.next().unwrap_or("").to_string();
                (outer, inner, value)
            })
            .collect()
    }

    #[test]
    fn test_example_unsorted() {
        let out = run(EXAMPLE, &Config::new()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "d a 1");
        for expected in [
            "d b -", "d c 0", "e a 2", "e b 5", "e c 2", "f a 1", "f b 2", "f c 3",
        ] {
            assert!(lines.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_example_by_column() {
        let config = Config::new().with_orientation(Orientation::ByCol);
        let out = run(EXAMPLE, &config).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(&lines[..3], &["a d 1", "a e 2", "a f 1"]);
        assert_eq!(lines[8], "c f 3");
    }

    #[test]
    fn test_round_trip() {
        let parsed = TableReader::from_config(&Config::new())
            .read(EXAMPLE.as_bytes())
            .unwrap();
        let out = run(EXAMPLE, &Config::new()).unwrap();

        assert_eq!(rebuild(&out), parsed.table);
        assert_eq!(out.lines().count(), parsed.table.cell_count());
    }

    #[test]
    fn test_format_error_writes_nothing() {
        let mut buf = Vec::new();
        let err = convert("- a b\nc 1 2\nd 3".as_bytes(), &mut buf, &Config::new()).unwrap_err();

        assert!(matches!(err, Error::Format { .. }));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_symmetric_keeps_lower_triangle() {
        let config = Config::new().with_symmetric(true);
        let out = run(SYMMETRIC, &config).unwrap();

        assert_eq!(out, "a a 0\nb a 1\nb b 0\nc a 2\nc b 3\nc c 0\n");
    }

    #[test]
    fn test_symmetric_with_sort_and_delimiter() {
        let input = "-\tb\ta\nb\t0\t1\na\t1\t0\n";
        let config = Config::new()
            .with_symmetric(true)
            .with_sort(SortMode::Lexical)
            .with_delimiter("TAB".parse().unwrap());

        // triangle follows row order (b before a); sorting applies afterwards
        assert_eq!(run(input, &config).unwrap(), "a a 0\na b 1\nb b 0\n");
    }

    #[test]
    fn test_asymmetric_writes_nothing() {
        let mut buf = Vec::new();
        let config = Config::new().with_symmetric(true);
        let err = convert("- a b\na 0 1\nb 2 0\n".as_bytes(), &mut buf, &config).unwrap_err();

        assert!(matches!(err, Error::Symmetry(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_numeric_sort() {
        let config = Config::new().with_sort(SortMode::Numeric);
        let out = run("- 10 2 1\n10 a b c\n", &config).unwrap();

        assert_eq!(out, "10 1 c\n10 2 b\n10 10 a\n");
    }
}
