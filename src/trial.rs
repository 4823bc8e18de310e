//! Robustness trials: corrupt a stored pattern, recall it, classify the result.

use crate::compare::{classify, RecallOutcome};
use crate::error::{HopfieldError, Result};
use crate::network::{HopfieldNetwork, RecallConfig, RecallState};
use crate::pattern::Pattern;
use rand::Rng;
use tracing::info;

/// Everything observed during one trial.
#[derive(Clone, Debug)]
pub struct Trial {
    /// Index of the queried pattern in the training set.
    pub index: usize,
    pub noise_level: f64,
    pub original: Pattern,
    pub noisy: Pattern,
    pub recovered: Pattern,
    /// Overlap between `recovered` and `original`, in [-1, 1].
    pub overlap: f64,
    pub state: RecallState,
    pub sweeps: usize,
    pub outcome: RecallOutcome,
}

/// Corrupt `patterns[index]` by `noise_level`, recall it and classify the result.
pub fn run_trial<R: Rng + ?Sized>(
    network: &HopfieldNetwork,
    patterns: &[Pattern],
    index: usize,
    noise_level: f64,
    config: &RecallConfig,
    rng: &mut R,
) -> Result<Trial> {
    let original = patterns.get(index).ok_or_else(|| {
        HopfieldError::InvalidInput(format!(
            "pattern index {} out of range for {} patterns",
            index,
            patterns.len()
        ))
    })?;

    let noisy = network.add_noise(original, noise_level, rng)?;
    let recall = network.recall_traced(&noisy, config)?;
    let outcome = classify(&recall.pattern, original, patterns);
    let overlap = recall.pattern.overlap(original);
    info!(
        index,
        noise_level,
        overlap,
        sweeps = recall.sweeps,
        state = ?recall.state,
        outcome = %outcome,
        "trial complete"
    );

    Ok(Trial {
        index,
        noise_level,
        original: original.clone(),
        noisy,
        recovered: recall.pattern,
        overlap,
        state: recall.state,
        sweeps: recall.sweeps,
        outcome,
    })
}
