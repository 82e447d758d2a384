//! Configuration handling for mat2trip

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Which axis becomes the outer key of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Row labels are outer keys, header labels inner keys
    #[default]
    ByRow,
    /// Header labels are outer keys, row labels inner keys
    ByCol,
}

/// Ordering applied to labels at both enumeration levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order
    #[default]
    None,
    /// Ascending byte-wise string order
    Lexical,
    /// Ascending numeric order
    Numeric,
}

/// Field separator for input lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Runs of whitespace, leading and trailing whitespace ignored
    #[default]
    Whitespace,
    /// The exact string
    Exact(String),
}

impl std::str::FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("delimiter must not be empty".to_string());
        }
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Delimiter::Exact("\t".to_string()));
        }
        Ok(Delimiter::Exact(s.to_string()))
    }
}

/// Resolved, immutable configuration for one conversion
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Outer key axis for storage and emission
    pub orientation: Orientation,
    /// Label ordering on output
    pub sort: SortMode,
    /// Validate symmetry and keep only the lower triangle
    pub symmetric: bool,
    /// Input field separator
    pub delimiter: Delimiter,
    /// Dump the parsed table to the debug log
    pub debug: bool,
}

impl Config {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer key axis
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set label ordering
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Enable symmetric reduction
    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable the table dump
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Apply defaults read from a config file
    pub fn with_file(mut self, file: &ConfigFile) -> Result<Self> {
        if let Some(orientation) = file.orientation {
            self.orientation = orientation;
        }
        if let Some(sort) = file.sort {
            self.sort = sort;
        }
        if let Some(sym) = file.sym {
            self.symmetric = sym;
        }
        if let Some(ref delim) = file.delim {
            self.delimiter = delim.parse().map_err(Error::Config)?;
        }
        Ok(self)
    }
}

/// Option defaults stored as a JSON object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub orientation: Option<Orientation>,
    pub sort: Option<SortMode>,
    pub sym: Option<bool>,
    pub delim: Option<String>,
}

impl ConfigFile {
    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
