//! Error types for matrix conversion

use std::path::PathBuf;

use thiserror::Error;

use crate::symmetry::Asymmetry;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions raised while converting a matrix
#[derive(Debug, Error)]
pub enum Error {
    /// The input path given on the command line does not exist
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// A data line does not have as many fields as the header
    #[error("line {line}: expected {expected} fields, found {found}")]
    Format {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Symmetric mode on a table whose rows are not all as wide as it is tall
    #[error("matrix is not square [{rows} x {columns}] (row '{row}')")]
    Shape {
        rows: usize,
        columns: usize,
        row: String,
    },

    /// Symmetric mode on a table with a mismatching cell pair
    #[error("matrix is not symmetric: {0}")]
    Symmetry(#[from] Asymmetry),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
