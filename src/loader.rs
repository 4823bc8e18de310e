//! CSV training-set loader.
//!
//! Expected layout: one header row, then one pattern per row. The first
//! column of every row is a label and is ignored; every other cell holds
//! an integer. Cells are coerced into {-1, +1}: `1` stays `+1`, `-1` stays
//! `-1`, and `0` becomes `-1`, so both bipolar and binary files load.
//!
//! ```text
//! id,c0,c1,c2,c3
//! 0,1,-1,1,-1
//! 1,0,0,1,1
//! ```

use crate::error::{HopfieldError, Result};
use crate::pattern::Pattern;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load every pattern from a CSV file.
pub fn load_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<Pattern>> {
    let file = File::open(path.as_ref())?;
    let patterns = read_patterns(file)?;
    debug!(
        path = %path.as_ref().display(),
        patterns = patterns.len(),
        size = patterns[0].dimensions(),
        "loaded training set"
    );
    Ok(patterns)
}

/// Read patterns from any CSV source.
///
/// Errors report `row` as the 0-based pattern index and `column` as the
/// 0-based position within the pattern (label column excluded).
pub fn read_patterns<R: Read>(reader: R) -> Result<Vec<Pattern>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut patterns: Vec<Pattern> = Vec::new();
    for (row, record) in csv.records().enumerate() {
        let record = record?;
        let mut data = Vec::with_capacity(record.len().saturating_sub(1));
        for (column, cell) in record.iter().skip(1).enumerate() {
            let value = coerce(cell).ok_or_else(|| HopfieldError::InvalidCell {
                row,
                column,
                value: cell.to_string(),
            })?;
            data.push(value);
        }

        if data.is_empty() {
            return Err(HopfieldError::EmptyInput(format!("row {} has no pattern cells", row)));
        }
        if let Some(first) = patterns.first() {
            if first.dimensions() != data.len() {
                return Err(HopfieldError::DimensionMismatch {
                    expected: first.dimensions(),
                    got: data.len(),
                });
            }
        }
        patterns.push(Pattern::from_bipolar_unchecked(data));
    }

    if patterns.is_empty() {
        return Err(HopfieldError::EmptyInput("no patterns in source".into()));
    }
    Ok(patterns)
}

fn coerce(cell: &str) -> Option<i8> {
    match cell.parse::<i64>().ok()? {
        1 => Some(1),
        0 | -1 => Some(-1),
        _ => None,
    }
}
