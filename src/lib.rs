//! # Hopfield: discrete associative memory
//!
//! A classic Hopfield network that stores bipolar patterns in a symmetric
//! weight matrix and reconstructs them from corrupted queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use hopfield::{HopfieldNetwork, NoiseInjector, Pattern};
//!
//! let a = Pattern::from_data(vec![1, 1, 1, 1, -1, -1, -1, -1]).unwrap();
//! let b = Pattern::from_data(vec![1, 1, -1, -1, 1, 1, -1, -1]).unwrap();
//!
//! let mut net = HopfieldNetwork::new(8).unwrap();
//! net.train(&[a.clone(), b.clone()]).unwrap();
//!
//! // Corrupt one position and let the network repair it.
//! let mut noise = NoiseInjector::with_seed(42);
//! let noisy = noise.add_noise(&a, 0.125).unwrap();
//! let recovered = net.recall(&noisy, 10).unwrap();
//! assert_eq!(noisy.hamming_distance(&a), 1);
//! assert_eq!(recovered, a);
//! ```
//!
//! ## Core Concepts
//!
//! - **Patterns**: fixed-length bipolar vectors ({-1, +1})
//! - **Training**: Hebbian outer-product rule, zero diagonal, scaled by 1/M
//! - **Recall**: sequential sweeps until a fixed point or the sweep budget
//! - **Noise**: flip `floor(N * level)` distinct positions, seedable
//! - **Outcomes**: exact match, alternate stored pattern, or spurious state

pub mod compare;
pub mod error;
pub mod loader;
pub mod network;
pub mod noise;
pub mod pattern;
pub mod render;
pub mod shared;
pub mod snapshot;
pub mod trial;

// Re-exports for convenience
pub use compare::{classify, nearest, RecallOutcome};
pub use error::{ErrorKind, HopfieldError, Result};
pub use loader::{load_patterns, read_patterns};
pub use network::{
    HopfieldNetwork, Recall, RecallConfig, RecallState, SweepStep, Sweeps,
    DEFAULT_MAX_ITERATIONS, DEFAULT_NOISE_LEVEL,
};
pub use noise::NoiseInjector;
pub use pattern::Pattern;
pub use render::{render_trial, render_triptych, DEFAULT_GRID_WIDTH};
pub use shared::SharedNetwork;
pub use snapshot::NetworkSnapshot;
pub use trial::{run_trial, Trial};
