//! Header row of the input matrix

/// Ordered fields of the first input line
///
/// Position 0 is the corner cell; positions 1.. are the column labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<String>,
}

impl Header {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Column labels, corner excluded
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().skip(1).map(String::as_str)
    }

    /// Total field count, corner included
    pub fn width(&self) -> usize {
        self.fields.len()
    }
}
