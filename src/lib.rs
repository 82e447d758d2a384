//! mat2trip - Convert a labelled matrix into triplets
//!
//! Reads a matrix with a header row and a leading label column and emits one
//! `row column value` line per cell, optionally sorted, transposed or reduced
//! to the lower triangle of a symmetric matrix.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod symmetry;

pub use config::Config;
pub use error::{Error, Result};
pub use model::Table;
pub use pipeline::convert;
