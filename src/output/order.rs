//! Label ordering for emission

use std::cmp::Ordering;

use crate::config::SortMode;

/// Numeric key of a label; unparseable labels and NaN count as zero
pub fn numeric_key(label: &str) -> f64 {
    match label.trim().parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => 0.0,
    }
}

/// Compare two labels under a sort mode
pub fn compare_labels(mode: SortMode, a: &str, b: &str) -> Ordering {
    match mode {
        SortMode::None => Ordering::Equal,
        SortMode::Lexical => a.cmp(b),
        SortMode::Numeric => numeric_key(a).total_cmp(&numeric_key(b)),
    }
}

/// Order labels in place; stable, so ties keep insertion order
pub fn sort_labels(labels: &mut [&str], mode: SortMode) {
    if mode != SortMode::None {
        labels.sort_by(|a, b| compare_labels(mode, a, b));
    }
}
