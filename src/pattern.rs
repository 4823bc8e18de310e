//! Pattern type for the Hopfield engine.
//!
//! Patterns are bipolar vectors with elements in {-1, +1}.
//! Internally stored as i8 for memory efficiency. The alphabet is checked
//! once at construction and there is no mutable access afterwards, so every
//! `Pattern` in circulation is valid.

use crate::error::{HopfieldError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A fixed-length bipolar vector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i8>", into = "Vec<i8>")]
pub struct Pattern {
    data: Vec<i8>,
}

impl Pattern {
    /// Create a pattern from raw values, rejecting anything outside {-1, +1}.
    pub fn from_data(data: Vec<i8>) -> Result<Self> {
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, &v)| v != 1 && v != -1) {
            return Err(HopfieldError::NonBipolar {
                index,
                value: value as i64,
            });
        }
        Ok(Self { data })
    }

    /// Coerce a binary encoding: 0 becomes -1, anything else +1.
    pub fn from_binary(bits: &[u8]) -> Self {
        let data = bits.iter().map(|&b| if b == 0 { -1 } else { 1 }).collect();
        Self { data }
    }

    /// Build from values already known to be bipolar.
    pub(crate) fn from_bipolar_unchecked(data: Vec<i8>) -> Self {
        debug_assert!(data.iter().all(|&v| v == 1 || v == -1));
        Self { data }
    }

    /// Get the dimensionality.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    /// Get the raw data as a slice.
    pub fn data(&self) -> &[i8] {
        &self.data
    }

    /// Number of positions where the two patterns differ.
    pub fn hamming_distance(&self, other: &Pattern) -> usize {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "Dimension mismatch in hamming distance"
        );

        self.data
            .iter()
            .zip(other.data.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Normalized agreement: (agreements - disagreements) / N.
    ///
    /// The Hopfield overlap order parameter: 1 for identical patterns, 0 for
    /// orthogonal ones, -1 for a pattern and its inverse.
    pub fn overlap(&self, other: &Pattern) -> f64 {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "Dimension mismatch in overlap"
        );
        if self.data.is_empty() {
            return 0.0;
        }

        let dot: i64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| (a as i64) * (b as i64))
            .sum();
        dot as f64 / self.data.len() as f64
    }

    /// Return a copy with every sign inverted.
    pub fn inverted(&self) -> Pattern {
        Self::from_bipolar_unchecked(self.data.iter().map(|&v| -v).collect())
    }
}

impl Index<usize> for Pattern {
    type Output = i8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl TryFrom<Vec<i8>> for Pattern {
    type Error = HopfieldError;

    fn try_from(data: Vec<i8>) -> Result<Self> {
        Self::from_data(data)
    }
}

impl From<Pattern> for Vec<i8> {
    fn from(pattern: Pattern) -> Self {
        pattern.data
    }
}
