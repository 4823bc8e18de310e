//! Serializable snapshot of a trained [`HopfieldNetwork`].
//!
//! A snapshot records the weight matrix together with the size and the
//! SHA-256 fingerprint of the batch it was trained on, so a weight file can
//! be traced back to its training set.
//!
//! # Example
//!
//! ```rust
//! use hopfield::{HopfieldNetwork, Pattern};
//!
//! let p = Pattern::from_data(vec![1, -1, 1, -1]).unwrap();
//! let mut net = HopfieldNetwork::new(4).unwrap();
//! net.train(&[p.clone()]).unwrap();
//!
//! let restored = HopfieldNetwork::from_snapshot(net.snapshot()).unwrap();
//! assert_eq!(restored.recall(&p, 10).unwrap(), p);
//! ```

use crate::error::{HopfieldError, Result};
use crate::network::HopfieldNetwork;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable state of a network for persistence and distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub size: usize,
    pub pattern_count: usize,
    pub fingerprint: Option<String>,
    /// Flat row-major: size rows × size columns.
    pub weights: Vec<f64>,
}

impl NetworkSnapshot {
    /// Save as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from JSON. The contents are not validated until
    /// [`HopfieldNetwork::from_snapshot`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl HopfieldNetwork {
    /// Capture the current weights.
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            size: self.size(),
            pattern_count: self.pattern_count(),
            fingerprint: self.fingerprint().map(str::to_string),
            weights: self.weights().to_vec(),
        }
    }

    /// Rebuild a network, checking shape, symmetry and zero diagonal.
    pub fn from_snapshot(snapshot: NetworkSnapshot) -> Result<Self> {
        let n = snapshot.size;
        if n == 0 {
            return Err(HopfieldError::InvalidConfiguration(
                "network size must be positive".into(),
            ));
        }
        let cells = n.checked_mul(n).ok_or_else(|| {
            HopfieldError::InvalidInput(format!("snapshot size {} overflows the weight matrix", n))
        })?;
        if snapshot.weights.len() != cells {
            return Err(HopfieldError::DimensionMismatch {
                expected: cells,
                got: snapshot.weights.len(),
            });
        }

        let w = &snapshot.weights;
        for i in 0..n {
            if w[i * n + i] != 0.0 {
                return Err(HopfieldError::InvalidInput(format!(
                    "weight ({i}, {i}) is {} but the diagonal must be zero",
                    w[i * n + i]
                )));
            }
            for j in (i + 1)..n {
                let (a, b) = (w[i * n + j], w[j * n + i]);
                if !a.is_finite() || a != b {
                    return Err(HopfieldError::InvalidInput(format!(
                        "weights ({i}, {j}) = {a} and ({j}, {i}) = {b} are not a symmetric finite pair"
                    )));
                }
            }
        }

        Ok(HopfieldNetwork::from_parts(
            n,
            snapshot.weights,
            snapshot.pattern_count,
            snapshot.fingerprint,
        ))
    }

    /// Save the network as a JSON snapshot.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.snapshot().save(path)
    }

    /// Load and validate a network saved with [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_snapshot(NetworkSnapshot::load(path)?)
    }
}
