//! ASCII rendering of original / noisy / recovered patterns side by side.
//!
//! `+1` is drawn as `#` and `-1` as `_`; a 64-neuron pattern with the
//! default width of 8 becomes an 8x8 grid.

use crate::error::{HopfieldError, Result};
use crate::pattern::Pattern;
use crate::trial::Trial;

/// Default grid width (8x8 for 64 neurons).
pub const DEFAULT_GRID_WIDTH: usize = 8;

const HEADER: &str = "Original Pattern       Noisy Pattern       Recovered Pattern";
const RULE_WIDTH: usize = 55;
const COLUMN_WIDTH: usize = 20;

/// Rows of `#`/`_` for one pattern, `width` cells per row.
pub fn grid_rows(pattern: &Pattern, width: usize) -> Result<Vec<String>> {
    if width == 0 || pattern.dimensions() % width != 0 {
        return Err(HopfieldError::InvalidInput(format!(
            "pattern of {} cells cannot be laid out {} wide",
            pattern.dimensions(),
            width
        )));
    }
    Ok(pattern
        .data()
        .chunks(width)
        .map(|row| row.iter().map(|&v| if v == 1 { '#' } else { '_' }).collect())
        .collect())
}

/// Render three equally sized patterns as aligned grids under `title`.
pub fn render_triptych(
    original: &Pattern,
    noisy: &Pattern,
    recovered: &Pattern,
    width: usize,
    title: &str,
) -> Result<String> {
    for other in [noisy, recovered] {
        if other.dimensions() != original.dimensions() {
            return Err(HopfieldError::DimensionMismatch {
                expected: original.dimensions(),
                got: other.dimensions(),
            });
        }
    }

    let original = grid_rows(original, width)?;
    let noisy = grid_rows(noisy, width)?;
    let recovered = grid_rows(recovered, width)?;
    let column = COLUMN_WIDTH.max(width);
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![title.to_string(), String::new(), HEADER.to_string(), rule.clone()];
    lines.extend(original.iter().zip(&noisy).zip(&recovered).map(|((o, n), r)| {
        format!("{:<column$} {:<column$} {:<column$}", o, n, r, column = column)
            .trim_end()
            .to_string()
    }));
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Render a [`Trial`] followed by its outcome.
pub fn render_trial(trial: &Trial, width: usize, title: &str) -> Result<String> {
    let out = render_triptych(&trial.original, &trial.noisy, &trial.recovered, width, title)?;
    Ok(format!("{}{}\n", out, trial.outcome))
}
