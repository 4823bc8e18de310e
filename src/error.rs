//! Error types for the Hopfield engine and its collaborators.

use thiserror::Error;

/// Hopfield error types.
#[derive(Error, Debug)]
pub enum HopfieldError {
    /// Network constructed with an unusable size
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Pattern length does not match the network size
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Pattern value outside {-1, +1}
    #[error("Value {value} at position {index} is not bipolar (expected -1 or +1)")]
    NonBipolar { index: usize, value: i64 },

    /// Noise level outside [0, 1]
    #[error("Noise level {0} is outside [0, 1]")]
    NoiseLevel(f64),

    /// Empty input where non-empty was required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Any other precondition violation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unparseable or out-of-alphabet cell in a pattern file
    #[error("Invalid cell at row {row}, column {column}: {value:?}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    /// Training produced a non-finite weight
    #[error("Numeric overflow while building the weight matrix")]
    NumericOverflow,

    /// A thread panicked while holding the shared network lock
    #[error("Network lock poisoned")]
    LockPoisoned,

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of [`HopfieldError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The engine was configured with an impossible shape.
    InvalidConfiguration,
    /// A call violated its preconditions.
    InvalidInput,
    /// Numeric, I/O or synchronization failure.
    Failure,
}

impl HopfieldError {
    /// Map the error onto its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            HopfieldError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            HopfieldError::DimensionMismatch { .. }
            | HopfieldError::NonBipolar { .. }
            | HopfieldError::NoiseLevel(_)
            | HopfieldError::EmptyInput(_)
            | HopfieldError::InvalidInput(_)
            | HopfieldError::InvalidCell { .. } => ErrorKind::InvalidInput,
            HopfieldError::NumericOverflow
            | HopfieldError::LockPoisoned
            | HopfieldError::Csv(_)
            | HopfieldError::Io(_)
            | HopfieldError::Json(_) => ErrorKind::Failure,
        }
    }
}

/// Result type alias for Hopfield operations.
pub type Result<T> = std::result::Result<T, HopfieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            HopfieldError::InvalidConfiguration("size".into()).kind(),
            ErrorKind::InvalidConfiguration
        );
        assert_eq!(HopfieldError::NoiseLevel(1.5).kind(), ErrorKind::InvalidInput);
        assert_eq!(
            HopfieldError::DimensionMismatch { expected: 4, got: 3 }.kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(HopfieldError::NumericOverflow.kind(), ErrorKind::Failure);
    }

    #[test]
    fn test_messages() {
        let err = HopfieldError::DimensionMismatch { expected: 64, got: 63 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 64, got 63");

        let err = HopfieldError::NonBipolar { index: 2, value: 0 };
        assert!(err.to_string().contains("position 2"));
    }
}
