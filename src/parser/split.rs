//! Field splitting for input lines

use crate::config::Delimiter;

/// Strip a trailing `\n` or `\r\n` from a raw line
pub fn chomp(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Comment lines start with `#`, optionally after whitespace
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Split a chomped line into fields
pub fn split_fields<'a>(line: &'a str, delimiter: &Delimiter) -> Vec<&'a str> {
    match delimiter {
        Delimiter::Whitespace => line.split_whitespace().collect(),
        Delimiter::Exact(sep) => line.split(sep.as_str()).collect(),
    }
}
