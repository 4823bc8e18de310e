//! Hopfield network: Hebbian training, sequential recall, noise injection.
//!
//! The engine stores an N x N weight matrix built from the outer products of
//! its training patterns. Recall repeatedly sweeps over every neuron, setting
//! each one to the sign of its local field computed against the *current*
//! state (updates inside a sweep are visible to later neurons of the same
//! sweep). The energy
//!
//! ```text
//! E(s) = -1/2 * sum_ij W[i][j] * s_i * s_j
//! ```
//!
//! never increases under this rule, so a sweep that changes nothing is a
//! genuine fixed point.
//!
//! # Example
//!
//! ```rust
//! use hopfield::{HopfieldNetwork, Pattern};
//!
//! let a = Pattern::from_data(vec![1, 1, 1, 1, -1, -1, -1, -1]).unwrap();
//! let b = Pattern::from_data(vec![1, -1, 1, -1, 1, -1, 1, -1]).unwrap();
//!
//! let mut net = HopfieldNetwork::new(8).unwrap();
//! net.train(&[a.clone(), b]).unwrap();
//!
//! let recovered = net.recall(&a, 10).unwrap();
//! assert_eq!(recovered, a);
//! ```

use crate::error::{HopfieldError, Result};
use crate::pattern::Pattern;
use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

/// Default sweep budget for [`HopfieldNetwork::recall`].
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Default fraction of flipped positions for [`HopfieldNetwork::add_noise`].
pub const DEFAULT_NOISE_LEVEL: f64 = 0.3;

/// Recall parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecallConfig {
    /// Maximum number of full sweeps before giving up on convergence.
    pub max_iterations: usize,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Terminal state of a recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecallState {
    /// A full sweep changed nothing.
    Converged,
    /// The sweep budget ran out before a fixed point was reached.
    Exhausted,
}

/// Result of [`HopfieldNetwork::recall_traced`].
#[derive(Clone, Debug)]
pub struct Recall {
    pub pattern: Pattern,
    pub state: RecallState,
    /// Sweeps performed, including the final unchanged one when converged.
    pub sweeps: usize,
    /// Energy of `pattern`.
    pub energy: f64,
}

impl Recall {
    pub fn converged(&self) -> bool {
        self.state == RecallState::Converged
    }
}

/// One completed sweep, as yielded by [`Sweeps`].
#[derive(Clone, Debug)]
pub struct SweepStep {
    /// State after the sweep.
    pub pattern: Pattern,
    /// Number of neurons whose sign changed during the sweep.
    pub flips: usize,
}

/// Iterator performing one recall sweep per call to `next()`.
///
/// Never ends on its own: stop pulling once `flips == 0` (fixed point) or
/// when the caller's budget runs out. Use [`HopfieldNetwork::energy`] on a
/// step's pattern when the energy trajectory is needed.
pub struct Sweeps<'a> {
    network: &'a HopfieldNetwork,
    state: Vec<i8>,
}

impl<'a> Iterator for Sweeps<'a> {
    type Item = SweepStep;

    fn next(&mut self) -> Option<SweepStep> {
        let flips = self.network.sweep(&mut self.state);
        Some(SweepStep {
            pattern: Pattern::from_bipolar_unchecked(self.state.clone()),
            flips,
        })
    }
}

/// Discrete Hopfield network with a fixed number of bipolar neurons.
#[derive(Clone, Debug)]
pub struct HopfieldNetwork {
    size: usize,
    /// Row-major flat storage: weights[i * size + j] = W[i][j].
    weights: Vec<f64>,
    pattern_count: usize,
    fingerprint: Option<String>,
}

impl HopfieldNetwork {
    /// Create an untrained network of `size` neurons (all weights zero).
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(HopfieldError::InvalidConfiguration(
                "network size must be positive".into(),
            ));
        }
        let cells = size.checked_mul(size).ok_or_else(|| {
            HopfieldError::InvalidConfiguration(format!(
                "network size {} overflows the weight matrix",
                size
            ))
        })?;
        Ok(Self {
            size,
            weights: vec![0.0; cells],
            pattern_count: 0,
            fingerprint: None,
        })
    }

    /// Number of neurons.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The weight matrix, row-major.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// W[i][j].
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.size + j]
    }

    /// Row `i` of the weight matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Number of patterns in the last training batch (0 if untrained).
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_trained(&self) -> bool {
        self.pattern_count > 0
    }

    /// Hex SHA-256 of the last training batch.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    // =========================================================================
    // Training
    // =========================================================================

    /// Train on a batch of patterns with the Hebbian outer-product rule.
    ///
    /// `W = (sum_p p p^T - diag) / M`. The previous weights are discarded;
    /// repeated calls never accumulate. On error the network is unchanged.
    pub fn train(&mut self, patterns: &[Pattern]) -> Result<()> {
        if patterns.is_empty() {
            return Err(HopfieldError::EmptyInput(
                "training set must contain at least one pattern".into(),
            ));
        }
        for pattern in patterns {
            self.check_dimensions(pattern)?;
        }

        let n = self.size;
        let mut scratch = vec![0.0f64; n * n];
        for pattern in patterns {
            let p = pattern.data();
            for i in 0..n {
                let pi = p[i] as f64;
                let row = &mut scratch[i * n..(i + 1) * n];
                for (w, &pj) in row.iter_mut().zip(p.iter()) {
                    *w += pi * pj as f64;
                }
            }
        }

        let m = patterns.len() as f64;
        for i in 0..n {
            scratch[i * n + i] = 0.0;
        }
        for w in scratch.iter_mut() {
            *w /= m;
            if !w.is_finite() {
                return Err(HopfieldError::NumericOverflow);
            }
        }

        self.weights = scratch;
        self.pattern_count = patterns.len();
        self.fingerprint = Some(fingerprint(patterns));
        debug!(patterns = patterns.len(), size = n, "trained network");
        Ok(())
    }

    // =========================================================================
    // Recall
    // =========================================================================

    /// Reconstruct a stored pattern from `query`.
    ///
    /// Runs at most `max_iterations` sweeps and stops early at a fixed point.
    /// Reaching the budget without converging is not an error; the state
    /// after the last sweep is returned.
    pub fn recall(&self, query: &Pattern, max_iterations: usize) -> Result<Pattern> {
        self.recall_traced(query, &RecallConfig { max_iterations })
            .map(|recall| recall.pattern)
    }

    /// [`recall`](Self::recall) with [`DEFAULT_MAX_ITERATIONS`].
    pub fn recall_default(&self, query: &Pattern) -> Result<Pattern> {
        self.recall(query, DEFAULT_MAX_ITERATIONS)
    }

    /// Recall, also reporting how it terminated.
    pub fn recall_traced(&self, query: &Pattern, config: &RecallConfig) -> Result<Recall> {
        if config.max_iterations == 0 {
            return Err(HopfieldError::InvalidInput(
                "max_iterations must be positive".into(),
            ));
        }

        self.check_dimensions(query)?;

        let mut state = query.data().to_vec();
        let mut sweeps = 0;
        let mut flips = usize::MAX;
        while sweeps < config.max_iterations && flips != 0 {
            flips = self.sweep(&mut state);
            sweeps += 1;
            trace!(sweep = sweeps, flips, "sweep complete");
        }

        let state_kind = if flips == 0 {
            RecallState::Converged
        } else {
            RecallState::Exhausted
        };
        let energy = self.energy_of(&state);
        debug!(sweeps, state = ?state_kind, energy, "recall finished");

        Ok(Recall {
            pattern: Pattern::from_bipolar_unchecked(state),
            state: state_kind,
            sweeps,
            energy,
        })
    }

    /// Step through recall one sweep at a time, starting from `query`.
    pub fn sweeps(&self, query: &Pattern) -> Result<Sweeps<'_>> {
        self.check_dimensions(query)?;
        Ok(Sweeps {
            network: self,
            state: query.data().to_vec(),
        })
    }

    /// One in-place sweep over every neuron; returns the number of flips.
    fn sweep(&self, state: &mut [i8]) -> usize {
        let mut flips = 0;
        for i in 0..self.size {
            let field: f64 = self
                .row(i)
                .iter()
                .zip(state.iter())
                .map(|(&w, &s)| w * s as f64)
                .sum();
            let next = if field >= 0.0 { 1 } else { -1 };
            if state[i] != next {
                state[i] = next;
                flips += 1;
            }
        }
        flips
    }

    /// Energy of a state: `-1/2 * s^T W s`.
    pub fn energy(&self, state: &Pattern) -> Result<f64> {
        self.check_dimensions(state)?;
        Ok(self.energy_of(state.data()))
    }

    fn energy_of(&self, state: &[i8]) -> f64 {
        let mut total = 0.0;
        for (i, &si) in state.iter().enumerate() {
            let field: f64 = self
                .row(i)
                .iter()
                .zip(state.iter())
                .map(|(&w, &s)| w * s as f64)
                .sum();
            total += si as f64 * field;
        }
        -0.5 * total
    }

    // =========================================================================
    // Noise
    // =========================================================================

    /// Flip `floor(N * noise_level)` distinct, uniformly chosen positions.
    ///
    /// Returns a new pattern; the input is left untouched. Pass a seeded RNG
    /// (see [`NoiseInjector::with_seed`](crate::noise::NoiseInjector::with_seed))
    /// for reproducible corruption.
    pub fn add_noise<R: Rng + ?Sized>(
        &self,
        pattern: &Pattern,
        noise_level: f64,
        rng: &mut R,
    ) -> Result<Pattern> {
        self.check_dimensions(pattern)?;
        crate::noise::flip_fraction(pattern, noise_level, rng)
    }

    fn check_dimensions(&self, pattern: &Pattern) -> Result<()> {
        if pattern.dimensions() != self.size {
            return Err(HopfieldError::DimensionMismatch {
                expected: self.size,
                got: pattern.dimensions(),
            });
        }
        Ok(())
    }

    pub(crate) fn from_parts(
        size: usize,
        weights: Vec<f64>,
        pattern_count: usize,
        fingerprint: Option<String>,
    ) -> Self {
        Self {
            size,
            weights,
            pattern_count,
            fingerprint,
        }
    }
}

/// Hex SHA-256 over the training batch, in order.
pub(crate) fn fingerprint(patterns: &[Pattern]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((patterns.len() as u64).to_le_bytes());
    for pattern in patterns {
        hasher.update((pattern.dimensions() as u64).to_le_bytes());
        let bytes: Vec<u8> = pattern.data().iter().map(|&v| v as u8).collect();
        hasher.update(&bytes);
    }
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
