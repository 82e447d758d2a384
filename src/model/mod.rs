//! Data model for labelled matrices

mod header;
mod table;

pub use header::Header;
pub use table::{LabelMap, Row, Table};
